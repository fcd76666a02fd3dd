//! Pipeline orchestration - wires the stages together in order.
//!
//! Discovery and watermark preparation run single-threaded before the pool
//! starts; the catalog and the overlay layers are frozen by the time any
//! worker touches them.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::types::RunSummary;

use super::catalog::FileCatalog;
use super::pool::WorkerPool;
use super::sequence::SequenceGenerator;
use super::transform::TransformContext;
use super::watermark::WatermarkLayers;

/// Runs the whole pipeline for one validated configuration.
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Discover, prepare overlays, run the pool to completion.
    ///
    /// Folder access problems and discovery I/O errors are fatal; everything
    /// per-file is skip-and-continue inside the pool, so the returned
    /// `processed` count can be lower than `discovered`.
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();

        self.config.check_folders()?;

        let catalog = FileCatalog::new(self.config.source_dir());
        let files = catalog.discover()?;
        let discovered = files.len();
        tracing::info!(
            "Discovered {} image(s) in {:?}",
            discovered,
            self.config.source_dir()
        );
        if files.is_empty() {
            tracing::warn!("Nothing to process in {:?}", self.config.source_dir());
            return Ok(RunSummary {
                discovered: 0,
                processed: 0,
                elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        let layers = if self.config.watermark.enabled() {
            Some(WatermarkLayers::prepare(
                &self.config.watermark.text,
                self.config.watermark.alpha,
                self.config.output.width,
                self.config.output.height,
            ))
        } else {
            None
        };

        let sequence = SequenceGenerator::new(
            &self.config.naming.pattern,
            self.config.naming.seq_start,
            self.config.naming.seq_step,
        );
        let ctx = Arc::new(TransformContext::new(
            sequence,
            layers,
            self.config.destination_dir(),
            self.config.output.width,
            self.config.output.height,
        ));

        let pool = WorkerPool::new(self.config.processing.workers);
        let processed = pool.run(files, ctx).await;

        let elapsed = start.elapsed();
        tracing::info!(
            "Processed {}/{} image(s) in {:?}",
            processed,
            discovered,
            elapsed
        );
        Ok(RunSummary {
            discovered,
            processed,
            elapsed_ms: elapsed.as_millis() as u64,
        })
    }
}
