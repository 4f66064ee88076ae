//! The ordered list of anchor vertices a counting run walks.

use core::cmp::Reverse;

use super::{CsrGraph, GraphError};

/// Anchors in processing order.
///
/// The scheduler assumes non-increasing degree: once one root drops below the
/// cooperative threshold, no later root is expected to reach it again.
/// [`RootList::by_degree`] produces that order; [`RootList::from_vec`] keeps
/// whatever order the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootList {
    roots: Vec<u32>,
}

impl RootList {
    /// Every vertex of `graph`, highest degree first, ties broken by ascending id.
    pub fn by_degree(graph: &CsrGraph) -> Self {
        // `CsrGraph` guarantees the count fits in u32 ids.
        let n = graph.vertex_count() as u32;
        let mut roots: Vec<u32> = (0..n).collect();
        roots.sort_by_key(|&v| (Reverse(graph.degree(v)), v));
        Self { roots }
    }

    /// Wraps a caller-ordered list after checking that every id is a vertex.
    ///
    /// # Errors
    /// [`GraphError::RootOutOfBounds`] for the first id that is not a vertex.
    pub fn from_vec(graph: &CsrGraph, roots: Vec<u32>) -> Result<Self, GraphError> {
        let n = graph.vertex_count();
        if let Some((position, &root)) = roots.iter().enumerate().find(|&(_, &r)| r as usize >= n) {
            return Err(GraphError::RootOutOfBounds { position, root });
        }
        Ok(Self { roots })
    }

    /// Whether degrees never increase along the list.
    pub fn is_degree_ordered(&self, graph: &CsrGraph) -> bool {
        self.roots
            .windows(2)
            .all(|w| graph.degree(w[0]) >= graph.degree(w[1]))
    }

    /// Roots in processing order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.roots
    }

    /// Number of roots.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether there is nothing to count.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_plus_edge() -> CsrGraph {
        // 0 is the hub; 3-4 hang together.
        CsrGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn by_degree_is_non_increasing_with_id_ties() {
        let g = star_plus_edge();
        let roots = RootList::by_degree(&g);
        assert_eq!(roots.as_slice(), &[0, 3, 4, 1, 2]);
        assert!(roots.is_degree_ordered(&g));
        assert_eq!(roots.len(), 5);
    }

    #[test]
    fn from_vec_keeps_order_and_checks_bounds() {
        let g = star_plus_edge();
        let roots = RootList::from_vec(&g, vec![1, 0]).unwrap();
        assert_eq!(roots.as_slice(), &[1, 0]);
        assert!(!roots.is_degree_ordered(&g));

        let err = RootList::from_vec(&g, vec![0, 9]).unwrap_err();
        assert_eq!(err, GraphError::RootOutOfBounds { position: 1, root: 9 });
    }

    #[test]
    fn empty_graph_has_no_roots() {
        let g = CsrGraph::from_edges(0, &[]).unwrap();
        assert!(RootList::by_degree(&g).is_empty());
    }
}
