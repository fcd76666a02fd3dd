//! Configuration management for batchframe.
//!
//! Configuration is loaded from a TOML file (`./batchframe.toml` by default).
//! All sections have defaults, but a real run needs at least the folder
//! paths filled in; `validate()` covers value ranges and `check_folders()`
//! covers filesystem access, so a broken setup fails before any image is
//! touched.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for batchframe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source and destination folders
    pub folders: FoldersConfig,

    /// Nominal output dimensions
    pub output: OutputConfig,

    /// Filename pattern and sequence settings
    pub naming: NamingConfig,

    /// Watermark overlay settings
    pub watermark: WatermarkConfig,

    /// Worker pool settings
    pub processing: ProcessingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path (`batchframe.toml` in the working
    /// directory).
    pub fn default_path() -> PathBuf {
        PathBuf::from("batchframe.toml")
    }

    /// Get the resolved source folder path (with ~ expansion).
    pub fn source_dir(&self) -> PathBuf {
        expand_tilde(&self.folders.source)
    }

    /// Get the resolved destination folder path (with ~ expansion).
    pub fn destination_dir(&self) -> PathBuf {
        expand_tilde(&self.folders.destination)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}
