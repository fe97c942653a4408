use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::DEFAULT_DATA_PATH;

/// Optional config file in the working directory.
pub const CONFIG_FILE: &str = "cvfolio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL or directory holding the data file.
    pub source: String,
    /// Data file path relative to `source`.
    pub data_path: String,
    /// Where to write the page; stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: ".".to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            output: None,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read the config file; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
            .map_err(|e| ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError(format!("Invalid config: {}", e)))
    }
}
