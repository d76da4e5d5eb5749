use std::fs::File;
use std::io::Read;
use std::path::Path;

use failure::ResultExt;
use serde_yaml;

use super::components::OverviewConfig;
use super::logging::Config as LoggingConfig;

use super::ErrorKind;
use super::Result;


/// Console configuration options.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Admin overview display options.
    #[serde(default)]
    pub overview: OverviewConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            logging: LoggingConfig::default(),
            overview: OverviewConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from the given [`std::fs::File`].
    ///
    /// [`std::fs::File`]: https://doc.rust-lang.org/std/fs/struct.File.html
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let shown = path.as_ref().to_string_lossy().into_owned();
        let config = File::open(path).with_context(|_| ErrorKind::ConfigOpen(shown))?;
        Config::from_reader(config)
    }

    /// Loads the configuration from the given [`std::io::Read`].
    ///
    /// [`std::io::Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
    pub fn from_reader<R: Read>(reader: R) -> Result<Config> {
        let conf = serde_yaml::from_reader(reader).with_context(|_| ErrorKind::ConfigDecode)?;
        Ok(conf)
    }
}
