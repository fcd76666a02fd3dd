//! Error types for the batchframe pipeline.
//!
//! Errors are split by phase: configuration problems are fatal and reported
//! before any processing starts, directory listing failures abort the run,
//! and per-file failures carry the offending path so workers can log and
//! skip them.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for batchframe operations.
#[derive(Error, Debug)]
pub enum BatchframeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors.
///
/// `Discovery` is fatal to the run; the per-file variants are skip-and-continue
/// inside the worker pool.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source folder cannot be listed
    #[error("Cannot list source folder {path}: {source}")]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image encoding or output write failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Convenience type alias for batchframe results.
pub type Result<T> = std::result::Result<T, BatchframeError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
