use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::search::search;

/// The TOML configuration filename
pub const CONFIG_FILENAME: &str = ".dt-header.toml";

/// Header configuration in TOML format
///
/// **Note**: It's up to the caller to perform validation after deserialization.
#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TomlConfig {
    pub macro_prefix: Option<String>,
    pub include_guard: Option<String>,
}

impl TomlConfig {
    /// Looks for [`CONFIG_FILENAME`] in `start` or its ancestors
    pub fn find(start: &Path) -> Option<PathBuf> {
        search(start, CONFIG_FILENAME, |p| p.is_file()).map(|p| p.1)
    }

    /// Loads the config file that applies to `input`, if there is one
    pub fn discover(input: &Path) -> Result<Option<Self>, ConfigError> {
        let start = input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Self::find(start).map(|path| Self::load(&path)).transpose()
    }

    /// Loads the config file from the file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(toml::from_str(&fs_err::read_to_string(path)?)?)
    }
}

/// Configuration errors encountered when loading the TOML config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize config")]
    Toml(#[from] toml::de::Error),
}
