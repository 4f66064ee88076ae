//! Branded, lock-free value slots shared by the workers of a run.
//!
//! Neither type synchronizes by itself. Stores and loads are `Relaxed`; the
//! run's [`GhostBarrier`](super::GhostBarrier) and the final thread join order
//! them.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

use crate::token::GhostBorrow;

/// One `u64` per root, each written by exactly one worker.
pub struct GhostSlots<'brand> {
    slots: Box<[AtomicU64]>,
    _brand: PhantomData<fn(&'brand ()) -> &'brand ()>,
}

impl<'brand> GhostSlots<'brand> {
    /// `len` zeroed slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| AtomicU64::new(0)).collect(),
            _brand: PhantomData,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Writes the final value of slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn publish(&self, _token: &impl GhostBorrow<'brand>, index: usize, value: u64) {
        self.slots[index].store(value, Ordering::Relaxed);
    }

    /// Reads slot `index`.
    #[inline]
    pub fn get(&self, _token: &impl GhostBorrow<'brand>, index: usize) -> u64 {
        self.slots[index].load(Ordering::Relaxed)
    }

    /// Consumes the slots once every worker has been joined.
    pub fn into_vec(self) -> Vec<u64> {
        self.slots
            .into_vec()
            .into_iter()
            .map(AtomicU64::into_inner)
            .collect()
    }
}

/// One cache-padded accumulator per worker, for cooperative reductions.
///
/// Worker `k` only ever writes entry `k`; the padding keeps neighbouring
/// workers off each other's cache lines.
pub struct WorkerPartials<'brand> {
    cells: Box<[CachePadded<AtomicU64>]>,
    _brand: PhantomData<fn(&'brand ()) -> &'brand ()>,
}

impl<'brand> WorkerPartials<'brand> {
    /// One zeroed accumulator for each of `workers` workers.
    pub fn new(workers: usize) -> Self {
        Self {
            cells: (0..workers)
                .map(|_| CachePadded::new(AtomicU64::new(0)))
                .collect(),
            _brand: PhantomData,
        }
    }

    /// Stores worker `worker`'s partial value for the current round.
    #[inline]
    pub fn set(&self, _token: &impl GhostBorrow<'brand>, worker: usize, value: u64) {
        self.cells[worker].store(value, Ordering::Relaxed);
    }

    /// Sum over all workers. Only meaningful after a barrier.
    pub fn sum(&self, _token: &impl GhostBorrow<'brand>) -> u64 {
        self.cells.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }
}
