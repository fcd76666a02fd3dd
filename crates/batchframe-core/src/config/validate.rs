//! Configuration validation: value range checks plus folder access probes.

use crate::error::ConfigError;
use crate::pipeline::SEQ_MARKER;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.output.width == 0 {
            return Err(ConfigError::ValidationError(
                "output.width must be > 0".into(),
            ));
        }
        if self.output.height == 0 {
            return Err(ConfigError::ValidationError(
                "output.height must be > 0".into(),
            ));
        }
        if self.processing.workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.workers must be > 0".into(),
            ));
        }
        if !self.naming.pattern.contains(SEQ_MARKER) {
            return Err(ConfigError::ValidationError(format!(
                "naming.pattern must contain the {SEQ_MARKER} marker"
            )));
        }
        if self.naming.seq_step < 1 {
            return Err(ConfigError::ValidationError(
                "naming.seq_step must be >= 1".into(),
            ));
        }
        // One consistent boundary: the inverse alpha scale is valid in [0, 100).
        if self.watermark.alpha >= 100 {
            return Err(ConfigError::ValidationError(
                "watermark.alpha must be in the 0..100 range".into(),
            ));
        }
        Ok(())
    }

    /// Verify the source folder is listable and the destination folder is
    /// writable. Called once, before any processing starts.
    pub fn check_folders(&self) -> Result<(), ConfigError> {
        let source = self.source_dir();
        std::fs::read_dir(&source).map_err(|e| {
            ConfigError::ValidationError(format!(
                "folders.source {} is not a readable directory: {e}",
                source.display()
            ))
        })?;

        let destination = self.destination_dir();
        if !destination.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "folders.destination {} is not a directory",
                destination.display()
            )));
        }
        // Write probe: permission bits alone don't tell us whether this
        // process can actually create files here.
        let probe = destination.join(format!(".batchframe-probe-{}", std::process::id()));
        std::fs::write(&probe, []).map_err(|e| {
            ConfigError::ValidationError(format!(
                "folders.destination {} is not writable: {e}",
                destination.display()
            ))
        })?;
        let _ = std::fs::remove_file(&probe);
        Ok(())
    }
}
