extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate serde_json;


mod admin;

pub use self::admin::AdminConfiguration;
pub use self::admin::ClientPort;
