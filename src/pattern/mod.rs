//! Per-anchor pattern counting by two levels of row intersection.
//!
//! For an edge `(anchor, peer)` with `peer < anchor`:
//!
//! 1. `C1 = N(anchor) ∩ N(peer)`
//! 2. for each `t` in `C1`, ascending: `C2 = C1 ∩ N(t)`, add `|C2|`
//!
//! The sum counts ordered pairs `(t, s)` of common neighbors that are adjacent to
//! each other, i.e. twice the number of 4-cliques through the edge. Summing over
//! every peer below the anchor processes each edge from its larger endpoint only.

use crate::{
    graph::CsrGraph,
    intersect::{intersect_into, CapacityError, OverflowPolicy, ScratchBuffer},
};

/// One worker's counting state: two private scratch buffers.
///
/// `common` holds `C1` while `nested` receives each `C2`; the second level reads
/// one and writes the other, so they cannot be the same buffer.
#[derive(Debug, Clone)]
pub struct PatternCounter {
    common: ScratchBuffer,
    nested: ScratchBuffer,
    policy: OverflowPolicy,
    edges_processed: u64,
}

impl PatternCounter {
    /// Creates a counter whose buffers each hold `capacity` ids.
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            common: ScratchBuffer::with_capacity(capacity),
            nested: ScratchBuffer::with_capacity(capacity),
            policy,
            edges_processed: 0,
        }
    }

    /// Pattern count rooted at the edge `(anchor, peer)`.
    ///
    /// Callers must pass `peer < anchor`; this is the ordering that keeps an
    /// edge from being counted from both ends.
    ///
    /// # Errors
    /// [`CapacityError`] if a buffer overflows under [`OverflowPolicy::Fail`].
    pub fn count_edge(
        &mut self,
        graph: &CsrGraph,
        anchor: u32,
        peer: u32,
    ) -> Result<u64, CapacityError> {
        debug_assert!(peer < anchor, "edge ({anchor}, {peer}) visited from its smaller end");
        self.edges_processed += 1;

        let common_len = intersect_into(
            graph.neighbors(anchor),
            graph.neighbors(peer),
            &mut self.common,
            self.policy,
        )?;

        let mut total = 0u64;
        for j in 0..common_len {
            let third = self.common.as_slice()[j];
            let nested = intersect_into(
                self.common.as_slice(),
                graph.neighbors(third),
                &mut self.nested,
                self.policy,
            )?;
            total += nested as u64;
        }
        Ok(total)
    }

    /// Pattern count for `anchor`: the sum of [`count_edge`](Self::count_edge)
    /// over every neighbor below it.
    ///
    /// # Errors
    /// [`CapacityError`] if a buffer overflows under [`OverflowPolicy::Fail`].
    pub fn count_anchor(&mut self, graph: &CsrGraph, anchor: u32) -> Result<u64, CapacityError> {
        let mut total = 0u64;
        for &peer in graph.neighbors(anchor) {
            if peer >= anchor {
                break;
            }
            total += self.count_edge(graph, anchor, peer)?;
        }
        Ok(total)
    }

    /// Number of `count_edge` calls made so far.
    #[inline]
    pub fn edges_processed(&self) -> u64 {
        self.edges_processed
    }

    /// Capacity of each scratch buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.common.capacity()
    }
}
