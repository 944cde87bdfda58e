use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{GeneratorError, GeneratorResult};
use crate::configs::*;

pub const CONFIG_PATHS: [&str; 2] = ["bandlimit.toml", "bandlimit.default.toml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  #[serde(default)]
  pub filter: FilterConfig,
  #[serde(default)]
  pub output: OutputConfig,
  pub logging: Option<LoggingConfig>,
}

impl Config {
  /// Loads the first config file found in the working directory, falling
  /// back to the built-in reference parameters when there is none.
  pub fn load() -> GeneratorResult<(Self, Option<&'static str>)> {
    match CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
      Some(path) => Ok((Self::from_file(path)?, Some(*path))),
      None => Ok((Self::default(), None)),
    }
  }

  pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)?;
    toml::from_str(&config_str).map_err(|source| GeneratorError::Config {
      path: path.to_path_buf(),
      source,
    })
  }
}
