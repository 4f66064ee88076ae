//! Fixed-size scoped worker pools that share a run token.
//!
//! Workers receive `&GhostToken<'brand>` and their id in `0..workers`. All of
//! them start together and are joined before the pool returns; nothing is
//! spawned or retired mid-run.

use core::fmt;

use crate::GhostToken;

/// A worker thread panicked instead of returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPanicked {
    /// Id of the first worker found to have panicked.
    pub worker: usize,
}

impl fmt::Display for WorkerPanicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker {} panicked", self.worker)
    }
}

impl std::error::Error for WorkerPanicked {}

/// Runs `work(token, id)` on `workers` scoped threads and collects the results
/// in id order.
///
/// # Errors
/// [`WorkerPanicked`] if any worker panicked. Every worker is joined first.
///
/// # Panics
/// Panics if `workers == 0`.
pub fn run_pool<'brand, W>(
    token: &GhostToken<'brand>,
    workers: usize,
    work: impl Fn(&GhostToken<'brand>, usize) -> W + Sync,
) -> Result<Vec<W>, WorkerPanicked>
where
    W: Send,
{
    assert!(workers != 0, "workers must be > 0");

    std::thread::scope(|scope| {
        let work = &work;
        let handles: Vec<_> = (0..workers)
            .map(|id| scope.spawn(move || work(token, id)))
            .collect();

        let mut out = Vec::with_capacity(workers);
        let mut panicked = None;
        for (id, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(value) => out.push(value),
                Err(_) => {
                    panicked.get_or_insert(WorkerPanicked { worker: id });
                }
            }
        }
        match panicked {
            Some(err) => Err(err),
            None => Ok(out),
        }
    })
}
