use core::fmt;

use crate::{concurrency::WorkerPanicked, intersect::CapacityError};

/// Why a counting run produced no report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// The configuration cannot drive a run.
    InvalidConfig(String),
    /// A scratch buffer overflowed under [`OverflowPolicy::Fail`](crate::OverflowPolicy::Fail).
    Capacity(CapacityError),
    /// A worker thread panicked.
    WorkerPanicked {
        /// Id of the worker.
        worker: usize,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid count configuration: {msg}"),
            Self::Capacity(err) => write!(f, "scratch buffer overflow: {err}"),
            Self::WorkerPanicked { worker } => write!(f, "worker {worker} panicked"),
        }
    }
}

impl std::error::Error for CountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capacity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CapacityError> for CountError {
    fn from(err: CapacityError) -> Self {
        Self::Capacity(err)
    }
}

impl From<WorkerPanicked> for CountError {
    fn from(err: WorkerPanicked) -> Self {
        Self::WorkerPanicked { worker: err.worker }
    }
}
