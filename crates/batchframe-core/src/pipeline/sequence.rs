//! Sequential output filename generation, safe under concurrent claims.

use std::sync::atomic::{AtomicI64, Ordering};

/// Marker in the filename pattern substituted with the claimed sequence value.
pub const SEQ_MARKER: &str = "$$";

/// Hands out strictly increasing sequence values to the pool workers.
///
/// The counter is the single piece of mutable state shared by all workers;
/// `fetch_add` makes the read-then-advance pair indivisible, so no two claims
/// ever observe the same value. Which worker (and therefore which source
/// image) gets which value is deliberately unspecified — only the set of
/// claimed values is deterministic.
pub struct SequenceGenerator {
    next: AtomicI64,
    step: i64,
    pattern: String,
}

impl SequenceGenerator {
    /// Create a generator starting at `start`, advancing by `step` per claim.
    ///
    /// `pattern` must contain [`SEQ_MARKER`]; config validation enforces this
    /// before a generator is ever built.
    pub fn new(pattern: impl Into<String>, start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step,
            pattern: pattern.into(),
        }
    }

    /// Atomically claim the next sequence value.
    pub fn claim(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::Relaxed)
    }

    /// Claim a value and materialize the output filename for it.
    ///
    /// The first `$$` is replaced with the decimal value, then the whole name
    /// is lower-cased (including any non-numeric parts of the pattern).
    pub fn next_filename(&self) -> String {
        let value = self.claim();
        self.pattern
            .replacen(SEQ_MARKER, &value.to_string(), 1)
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_filename_default_step() {
        let seq = SequenceGenerator::new("OBR_adasdas_$$.jpg", 50, 1);
        assert_eq!(seq.next_filename(), "obr_adasdas_50.jpg");
        assert_eq!(seq.next_filename(), "obr_adasdas_51.jpg");
        assert_eq!(seq.next_filename(), "obr_adasdas_52.jpg");
    }

    #[test]
    fn test_filename_custom_step() {
        let seq = SequenceGenerator::new("OBR_adasdas_$$.jpg", 550, 15);
        assert_eq!(seq.next_filename(), "obr_adasdas_550.jpg");
        assert_eq!(seq.next_filename(), "obr_adasdas_565.jpg");
        assert_eq!(seq.next_filename(), "obr_adasdas_580.jpg");
    }

    #[test]
    fn test_only_first_marker_is_replaced() {
        let seq = SequenceGenerator::new("a_$$_b_$$.jpg", 7, 1);
        assert_eq!(seq.next_filename(), "a_7_b_$$.jpg");
    }

    #[test]
    fn test_concurrent_claims_are_unique() {
        let seq = SequenceGenerator::new("img-$$.jpg", 100, 3);
        let claimed: BTreeSet<i64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..25).map(|_| seq.claim()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let expected: BTreeSet<i64> = (0..100).map(|i| 100 + i * 3).collect();
        assert_eq!(claimed, expected);
    }
}
