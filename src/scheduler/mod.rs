//! Work scheduling of anchors across a fixed worker pool.
//!
//! Roots are walked in list order in two phases:
//!
//! - **Cooperative**: while the current root's degree is at least
//!   `degree_threshold`, every worker takes a strided slice of that root's peers
//!   (worker `k` takes positions `k, k + W, k + 2W, ...`). Workers meet at a
//!   barrier before and after the slice; worker 0 then sums the partials into
//!   the root's slot.
//! - **Round-robin**: from the first root below the threshold on, worker `k`
//!   owns roots `i + k, i + k + W, ...` outright and writes their counts with no
//!   synchronization.
//!
//! The switch happens once. The root list is expected in non-increasing degree
//! order; a later high-degree root is still counted correctly, just by a single
//! worker.

mod config;
mod error;
mod report;

pub use config::CountConfig;
pub use error::CountError;
pub use report::CountReport;

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use crate::{
    concurrency::{run_pool, GhostBarrier, GhostSlots, WorkerPartials},
    graph::{CsrGraph, RootList},
    intersect::CapacityError,
    pattern::PatternCounter,
    GhostToken,
};

/// Shared state of one run, branded with the run's token.
struct RunState<'brand> {
    barrier: GhostBarrier<'brand>,
    partials: WorkerPartials<'brand>,
    counts: GhostSlots<'brand>,
    timing: Option<Timing<'brand>>,
    abort: AtomicBool,
    failure: OnceLock<CapacityError>,
}

struct Timing<'brand> {
    partials: WorkerPartials<'brand>,
    elapsed: GhostSlots<'brand>,
}

impl<'brand> RunState<'brand> {
    fn new(config: &CountConfig, roots: usize) -> Self {
        Self {
            barrier: GhostBarrier::new(config.workers),
            partials: WorkerPartials::new(config.workers),
            counts: GhostSlots::new(roots),
            timing: config.instrument.then(|| Timing {
                partials: WorkerPartials::new(config.workers),
                elapsed: GhostSlots::new(roots),
            }),
            abort: AtomicBool::new(false),
            failure: OnceLock::new(),
        }
    }

    #[inline]
    fn aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }

    fn fail(&self, err: CapacityError) {
        let _ = self.failure.set(err);
        self.abort.store(true, Ordering::Relaxed);
    }
}

/// What each worker hands back when it finishes.
struct WorkerTally {
    cooperative_roots: usize,
    edges_processed: u64,
}

/// Runs pattern counts for a root list on a fixed pool of workers.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: CountConfig,
}

impl Scheduler {
    /// Creates a scheduler for `config`.
    pub fn new(config: CountConfig) -> Self {
        Self { config }
    }

    /// The configuration this scheduler runs with.
    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Counts the pattern for every root in `roots`.
    ///
    /// The result has one count per root, in list order. Running twice on the
    /// same inputs yields the same counts.
    ///
    /// # Errors
    /// - [`CountError::InvalidConfig`] if the configuration does not validate
    /// - [`CountError::Capacity`] under `OverflowPolicy::Fail` when an
    ///   intersection overflows; remaining work is skipped
    /// - [`CountError::WorkerPanicked`] if a worker thread panicked
    pub fn run(&self, graph: &CsrGraph, roots: &RootList) -> Result<CountReport, CountError> {
        self.config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            workers = self.config.workers,
            degree_threshold = self.config.degree_threshold,
            scratch_capacity = self.config.scratch_capacity,
            roots = roots.len(),
            "starting motif count"
        );

        let report = GhostToken::new(|token| -> Result<CountReport, CountError> {
            let state = RunState::new(&self.config, roots.len());
            let tallies = run_pool(&token, self.config.workers, |t, id| {
                self.work(t, id, graph, roots.as_slice(), &state)
            })?;

            let RunState {
                counts,
                timing,
                failure,
                ..
            } = state;
            if let Some(err) = failure.into_inner() {
                return Err(CountError::Capacity(err));
            }

            Ok(CountReport {
                counts: counts.into_vec(),
                elapsed_ns: timing.map(|t| t.elapsed.into_vec()),
                cooperative_roots: tallies.first().map_or(0, |t| t.cooperative_roots),
                edges_processed: tallies.iter().map(|t| t.edges_processed).sum(),
            })
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            cooperative_roots = report.cooperative_roots,
            edges_processed = report.edges_processed,
            total = report.total(),
            "motif count finished"
        );

        Ok(report)
    }

    /// Body of worker `id`.
    fn work<'brand>(
        &self,
        token: &GhostToken<'brand>,
        id: usize,
        graph: &CsrGraph,
        roots: &[u32],
        state: &RunState<'brand>,
    ) -> WorkerTally {
        let workers = self.config.workers;
        let mut counter = PatternCounter::new(self.config.scratch_capacity, self.config.overflow);

        // Cooperative phase. Every worker walks the same prefix, so all of them
        // hit the barrier the same number of times, even after an abort.
        let mut i = 0;
        while i < roots.len() {
            let root = roots[i];
            if graph.degree(root) < self.config.degree_threshold {
                break;
            }
            let started = state.timing.as_ref().map(|_| Instant::now());
            state.barrier.wait(token);

            let mut partial = 0u64;
            if !state.aborted() {
                for &peer in graph.neighbors(root).iter().skip(id).step_by(workers) {
                    if peer >= root {
                        break;
                    }
                    match counter.count_edge(graph, root, peer) {
                        Ok(n) => partial += n,
                        Err(err) => {
                            state.fail(err);
                            break;
                        }
                    }
                }
            }
            state.partials.set(token, id, partial);
            if let (Some(timing), Some(started)) = (&state.timing, started) {
                timing.partials.set(token, id, elapsed_ns(started));
            }

            state.barrier.wait(token);
            if id == 0 {
                state.counts.publish(token, i, state.partials.sum(token));
                if let Some(timing) = &state.timing {
                    timing.elapsed.publish(token, i, timing.partials.sum(token));
                }
            }
            i += 1;
        }
        let cooperative_roots = i;

        // Round-robin phase: each root belongs to exactly one worker.
        for index in (i + id..roots.len()).step_by(workers) {
            if state.aborted() {
                break;
            }
            let started = state.timing.as_ref().map(|_| Instant::now());
            match counter.count_anchor(graph, roots[index]) {
                Ok(n) => state.counts.publish(token, index, n),
                Err(err) => {
                    state.fail(err);
                    break;
                }
            }
            if let (Some(timing), Some(started)) = (&state.timing, started) {
                timing.elapsed.publish(token, index, elapsed_ns(started));
            }
        }

        WorkerTally {
            cooperative_roots,
            edges_processed: counter.edges_processed(),
        }
    }
}

fn elapsed_ns(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Counts `roots` on `graph` with a one-off [`Scheduler`].
///
/// # Errors
/// See [`Scheduler::run`].
pub fn count_patterns(
    graph: &CsrGraph,
    roots: &RootList,
    config: &CountConfig,
) -> Result<CountReport, CountError> {
    Scheduler::new(config.clone()).run(graph, roots)
}
