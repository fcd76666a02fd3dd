//! Image transformation pipeline components.
//!
//! The stages, in the order the orchestrator runs them:
//! - **catalog**: enumerate the source folder and normalize entries to JPEG
//! - **sequence**: claim monotonically increasing output filenames
//! - **watermark**: pre-render the two orientation-specific overlay layers
//! - **pool**: fixed worker pool draining the work queue
//! - **transform**: per-image resize, composite, and write
//! - **processor**: wires the stages together
//!
//! Support modules: **decode** (content-based format detection), **font**
//! (built-in watermark glyphs), **orientation** (resize-target selection).

pub mod catalog;
pub mod decode;
mod font;
pub mod orientation;
pub mod pool;
pub mod processor;
pub mod sequence;
pub mod transform;
pub mod watermark;

// Re-exports for convenient access
pub use catalog::{FileCatalog, CANONICAL_EXTENSION};
pub use orientation::Orientation;
pub use pool::WorkerPool;
pub use processor::BatchProcessor;
pub use sequence::{SequenceGenerator, SEQ_MARKER};
pub use transform::{transform_one, TransformContext};
pub use watermark::WatermarkLayers;
