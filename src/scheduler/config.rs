//! Run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CountError;
use crate::intersect::OverflowPolicy;

/// Knobs for one [`Scheduler`](super::Scheduler) run.
///
/// Every field has a default, so a JSON config only needs the fields it changes:
///
/// ```rust
/// use halo_motif::{CountConfig, OverflowPolicy};
///
/// let config = CountConfig::from_json_str(r#"{ "workers": 4, "overflow": "fail" }"#).unwrap();
/// assert_eq!(config.workers, 4);
/// assert_eq!(config.overflow, OverflowPolicy::Fail);
/// assert_eq!(config.degree_threshold, CountConfig::default().degree_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountConfig {
    /// Size of the worker pool.
    pub workers: usize,
    /// Roots with at least this degree are counted cooperatively by all workers.
    pub degree_threshold: usize,
    /// Capacity of each of a worker's two scratch buffers.
    pub scratch_capacity: usize,
    /// What happens when an intersection exceeds `scratch_capacity`.
    pub overflow: OverflowPolicy,
    /// Record per-root elapsed time.
    pub instrument: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            workers: 16,
            degree_threshold: 64,
            scratch_capacity: 4096,
            overflow: OverflowPolicy::Truncate,
            instrument: false,
        }
    }
}

impl CountConfig {
    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the cooperative degree threshold (inclusive).
    pub fn with_degree_threshold(mut self, threshold: usize) -> Self {
        self.degree_threshold = threshold;
        self
    }

    /// Sets the scratch buffer capacity.
    pub fn with_scratch_capacity(mut self, capacity: usize) -> Self {
        self.scratch_capacity = capacity;
        self
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Turns per-root timing on or off.
    pub fn with_instrument(mut self, instrument: bool) -> Self {
        self.instrument = instrument;
        self
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    /// [`CountError::InvalidConfig`] for zero workers or zero scratch capacity.
    pub fn validate(&self) -> Result<(), CountError> {
        if self.workers == 0 {
            return Err(CountError::InvalidConfig("workers must be > 0".into()));
        }
        if self.scratch_capacity == 0 {
            return Err(CountError::InvalidConfig(
                "scratch_capacity must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    ///
    /// # Errors
    /// [`CountError::InvalidConfig`] on malformed JSON, unknown fields or
    /// invalid values.
    pub fn from_json_str(json: &str) -> Result<Self, CountError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CountError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    /// [`CountError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CountError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CountError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}
