//! Core data types for the batchframe pipeline.

use serde::Serialize;

/// Outcome of one pipeline run.
///
/// `processed` can be lower than `discovered` when individual files failed to
/// decode or write; those are logged and skipped, never fatal to the pool.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Number of catalog entries handed to the worker pool
    pub discovered: usize,

    /// Number of output images successfully written
    pub processed: u64,

    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Files that were discovered but not successfully written.
    pub fn skipped(&self) -> u64 {
        (self.discovered as u64).saturating_sub(self.processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_is_discovered_minus_processed() {
        let summary = RunSummary {
            discovered: 5,
            processed: 3,
            elapsed_ms: 10,
        };
        assert_eq!(summary.skipped(), 2);
    }

    #[test]
    fn skipped_saturates_at_zero() {
        let summary = RunSummary {
            discovered: 0,
            processed: 1,
            elapsed_ms: 0,
        };
        assert_eq!(summary.skipped(), 0);
    }
}
