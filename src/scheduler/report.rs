use serde::{Deserialize, Serialize};

/// Output of one counting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// `counts[i]` is the pattern count of `roots[i]`.
    pub counts: Vec<u64>,
    /// Per-root elapsed nanoseconds, present when the run was instrumented.
    /// Cooperative roots report the sum over all workers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ns: Option<Vec<u64>>,
    /// How many leading roots were counted cooperatively.
    pub cooperative_roots: usize,
    /// Total per-edge counts performed across all workers.
    pub edges_processed: u64,
}

impl CountReport {
    /// Sum of all per-root counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of roots counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the run had no roots.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
