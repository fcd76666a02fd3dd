//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source and destination folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldersConfig {
    /// Folder scanned (non-recursively) for input images
    pub source: PathBuf,

    /// Folder the sequenced JPEG outputs are written into
    pub destination: PathBuf,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("./input"),
            destination: PathBuf::from("./output"),
        }
    }
}

/// Nominal output dimensions (landscape orientation).
///
/// Portrait-or-square sources get the axes swapped, so a 640x480 config
/// produces 480x640 portrait outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Output filename pattern and sequence counter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Filename pattern; the first `$$` is replaced with the claimed
    /// sequence value and the whole name is lower-cased
    pub pattern: String,

    /// First sequence value of the run
    pub seq_start: i64,

    /// Increment between consecutive claims
    pub seq_step: i64,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            pattern: "img-$$.jpg".to_string(),
            seq_start: 0,
            seq_step: 1,
        }
    }
}

/// Watermark overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Text rendered onto every output; empty disables watermarking
    pub text: String,

    /// Transparency on an inverse scale: 0 is near-opaque text, 99 is
    /// near-invisible. Valid range is [0, 100).
    pub alpha: u8,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            alpha: 80,
        }
    }
}

impl WatermarkConfig {
    /// Whether overlay layers should be prepared for this run.
    pub fn enabled(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Worker pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of parallel pool workers
    pub workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { workers: 3 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
