//! # `halo_motif` - intersection-based motif counting
//!
//! Counts a small clique-shaped pattern anchored at each vertex of a large,
//! static, undirected graph. Nothing is enumerated explicitly: each anchor's
//! count comes from two levels of merges over sorted neighbor rows.
//!
//! ## Pipeline
//!
//! Data flows one way:
//!
//! 1. **Graph store** ([`CsrGraph`], [`RootList`]): read-only CSR rows, strictly
//!    ascending, plus the ordered list of anchors.
//! 2. **Intersection engine** ([`intersect_into`]): bounded merge of two rows
//!    into a fixed-capacity [`ScratchBuffer`].
//! 3. **Pattern counter** ([`PatternCounter`]): for an edge `(anchor, peer)`
//!    with `peer < anchor`, `C1 = N(anchor) ∩ N(peer)` and then `|C1 ∩ N(t)|`
//!    summed over `t` in `C1`.
//! 4. **Scheduler** ([`Scheduler`]): a fixed pool of workers, cooperating on
//!    high-degree roots behind a barrier and splitting the rest round-robin.
//!
//! ## Run branding
//!
//! A run executes inside [`GhostToken::new`]. The barrier, per-worker partials
//! and result slots carry the token's brand, so workers share them through
//! `&GhostToken<'brand>` and none of it escapes the run.
//!
//! ## Example
//!
//! ```rust
//! use halo_motif::{CountConfig, CsrGraph, RootList, Scheduler};
//!
//! // K4: every edge out of vertex 3 sees two ordered pairs of adjacent common neighbors.
//! let graph = CsrGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
//! let roots = RootList::from_vec(&graph, vec![3]).unwrap();
//! let config = CountConfig::default().with_workers(2).with_degree_threshold(3);
//!
//! let report = Scheduler::new(config).run(&graph, &roots).unwrap();
//! assert_eq!(report.counts, vec![6]);
//! assert_eq!(report.cooperative_roots, 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;
pub mod graph;
pub mod intersect;
pub mod pattern;
pub mod scheduler;
pub mod token;

pub use graph::{CsrGraph, GraphError, RootList};
pub use intersect::{intersect_into, CapacityError, OverflowPolicy, ScratchBuffer};
pub use pattern::PatternCounter;
pub use scheduler::{count_patterns, CountConfig, CountError, CountReport, Scheduler};
pub use token::GhostToken;

// Brands and tokens are compile-time only.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::InvariantLifetime<'static>>() == 0);
};
