//! Batchframe core - concurrent batch image resize pipeline.
//!
//! Batchframe converts a folder of source images into a sequence of resized,
//! optionally watermarked JPEG outputs, processed by a fixed pool of
//! concurrent workers.
//!
//! # Architecture
//!
//! ```text
//! Source folder → Catalog (normalize to JPEG, sort) → Worker pool
//!               → resize → watermark composite → sequenced JPEG outputs
//! ```
//!
//! Discovery and watermark preparation run before the pool starts; the only
//! mutable shared state afterwards is the atomic sequence counter and the
//! processed counter.
//!
//! # Usage
//!
//! ```rust,ignore
//! use batchframe_core::{BatchProcessor, Config};
//!
//! #[tokio::main]
//! async fn main() -> batchframe_core::Result<()> {
//!     let config = Config::load()?;
//!     let summary = BatchProcessor::new(config).run().await?;
//!     println!("processed {} image(s)", summary.processed);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{BatchframeError, ConfigError, PipelineError, PipelineResult, Result};
pub use pipeline::{
    BatchProcessor, FileCatalog, Orientation, SequenceGenerator, WatermarkLayers, WorkerPool,
};
pub use types::RunSummary;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
