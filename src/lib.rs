#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;

#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_json;

extern crate voltconsole_models;

#[cfg(test)]
extern crate serde_json;


mod components;
mod config;
mod error;
mod interfaces;

pub mod logging;

pub use self::components::resolve_surfaces;
pub use self::components::AdminOverview;
pub use self::components::OverviewConfig;
pub use self::config::Config;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::error::Result;
pub use self::interfaces::DisplaySurface;
pub use self::interfaces::Element;
pub use self::interfaces::Field;
pub use self::interfaces::IndicatorState;
pub use self::interfaces::PageElements;
pub use self::interfaces::StaticPage;
pub use self::interfaces::SurfaceMap;


lazy_static! {
    /// Version string reported by the console.
    pub static ref VERSION: String = String::from(env!("CARGO_PKG_VERSION"));
}
