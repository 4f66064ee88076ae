//! Concurrency building blocks for a counting run.
//!
//! A run owns a fixed pool of workers that share a read-only graph. The only
//! shared mutable state is in branded slots, ordered by a branded barrier
//! rather than guarded by locks.

pub mod barrier;
pub mod scoped;
pub mod slots;

pub use barrier::GhostBarrier;
pub use scoped::{run_pool, WorkerPanicked};
pub use slots::{GhostSlots, WorkerPartials};
