//! `GhostBarrier` - a token-gated barrier for one counting run.

use std::marker::PhantomData;
use std::sync::Barrier;

use crate::token::GhostBorrow;

/// A barrier that only workers of the run `'brand` can wait on.
///
/// Cooperative rounds use it twice per root: once so that nobody overwrites a
/// partial sum the previous reduction is still reading, and once so that the
/// reducing worker sees every partial sum of the current root.
pub struct GhostBarrier<'brand> {
    inner: Barrier,
    parties: usize,
    _brand: PhantomData<fn(&'brand ()) -> &'brand ()>,
}

impl<'brand> GhostBarrier<'brand> {
    /// Creates a barrier that releases once `parties` workers have arrived.
    pub fn new(parties: usize) -> Self {
        Self {
            inner: Barrier::new(parties),
            parties,
            _brand: PhantomData,
        }
    }

    /// Number of workers that must arrive before any is released.
    #[inline]
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Blocks until all parties have arrived.
    ///
    /// Everything a worker wrote before its `wait` happens-before everything any
    /// worker does after the same `wait` returns. A party that never arrives
    /// blocks the others for good.
    pub fn wait(&self, _token: &impl GhostBorrow<'brand>) {
        self.inner.wait();
    }
}
