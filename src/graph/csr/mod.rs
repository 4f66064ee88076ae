//! A read-only CSR (compressed sparse row) graph store.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `neighbors`: contiguous `u32` ids; row `v` is `neighbors[offsets[v]..offsets[v + 1]]`
//!
//! Every row is strictly ascending. That is what lets the intersection engine run
//! a single forward merge over two rows.

use super::GraphError;

/// An immutable CSR graph with sorted, duplicate-free rows.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_csr_parts` | \(O(n + m)\) | Validates offsets, bounds and row order |
/// | `from_edges` | \(O(n + m \log d)\) | Symmetrizes, sorts, dedups |
/// | `neighbors` | \(O(1)\) | Borrowed slice |
/// | `degree` | \(O(1)\) | |
/// | `has_edge` | \(O(\log d)\) | Binary search in a sorted row |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    neighbors: Vec<u32>,
}

impl CsrGraph {
    /// Builds a graph directly from CSR parts.
    ///
    /// # Errors
    /// - [`GraphError::EmptyOffsets`] if `offsets` is empty
    /// - [`GraphError::OffsetsNotZeroBased`] if `offsets[0] != 0`
    /// - [`GraphError::OffsetsNotMonotone`] if offsets decrease
    /// - [`GraphError::EdgeCountMismatch`] if `offsets.last() != neighbors.len()`
    /// - [`GraphError::NeighborOutOfBounds`] if an id is `>= n`
    /// - [`GraphError::UnsortedAdjacency`] if a row is not strictly ascending
    pub fn from_csr_parts(offsets: Vec<usize>, neighbors: Vec<u32>) -> Result<Self, GraphError> {
        let Some(&last) = offsets.last() else {
            return Err(GraphError::EmptyOffsets);
        };
        if offsets[0] != 0 {
            return Err(GraphError::OffsetsNotZeroBased);
        }
        let n = offsets.len() - 1;
        if u32::try_from(n).is_err() {
            return Err(GraphError::TooManyVertices { count: n });
        }
        for (vertex, w) in offsets.windows(2).enumerate() {
            if w[1] < w[0] {
                return Err(GraphError::OffsetsNotMonotone { vertex });
            }
        }
        if last != neighbors.len() {
            return Err(GraphError::EdgeCountMismatch {
                expected: last,
                actual: neighbors.len(),
            });
        }

        for (vertex, w) in offsets.windows(2).enumerate() {
            let row = &neighbors[w[0]..w[1]];
            if let Some(&neighbor) = row.iter().find(|&&u| u as usize >= n) {
                return Err(GraphError::NeighborOutOfBounds { vertex, neighbor });
            }
            if row.windows(2).any(|p| p[0] >= p[1]) {
                return Err(GraphError::UnsortedAdjacency { vertex });
            }
        }

        Ok(Self { offsets, neighbors })
    }

    /// Builds an undirected graph from an edge list.
    ///
    /// Each pair is inserted in both directions. Self-loops are dropped and
    /// parallel edges collapse, so every row ends up strictly ascending.
    ///
    /// # Errors
    /// [`GraphError::NeighborOutOfBounds`] if an endpoint is `>= vertex_count`,
    /// [`GraphError::TooManyVertices`] if `vertex_count` does not fit in `u32` ids.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> Result<Self, GraphError> {
        if vertex_count > u32::MAX as usize {
            return Err(GraphError::TooManyVertices { count: vertex_count });
        }
        for &(u, v) in edges {
            if u as usize >= vertex_count {
                return Err(GraphError::NeighborOutOfBounds {
                    vertex: v as usize,
                    neighbor: u,
                });
            }
            if v as usize >= vertex_count {
                return Err(GraphError::NeighborOutOfBounds {
                    vertex: u as usize,
                    neighbor: v,
                });
            }
        }

        // Pass 1: degree histogram (both directions, no self-loops).
        let mut counts = vec![0usize; vertex_count];
        for &(u, v) in edges {
            if u != v {
                counts[u as usize] += 1;
                counts[v as usize] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);
        let mut total = 0usize;
        for c in counts {
            total += c;
            offsets.push(total);
        }

        // Pass 2: scatter into rows.
        let mut targets = vec![0u32; total];
        let mut cursors = offsets.clone();
        for &(u, v) in edges {
            if u != v {
                targets[cursors[u as usize]] = v;
                cursors[u as usize] += 1;
                targets[cursors[v as usize]] = u;
                cursors[v as usize] += 1;
            }
        }

        sort_rows(&offsets, &mut targets);

        // Compact away duplicates in place; `write` never overtakes the read cursor.
        let mut compact = Vec::with_capacity(vertex_count + 1);
        compact.push(0);
        let mut write = 0usize;
        for w in offsets.windows(2) {
            let mut last = None;
            for i in w[0]..w[1] {
                let x = targets[i];
                if last != Some(x) {
                    targets[write] = x;
                    write += 1;
                    last = Some(x);
                }
            }
            compact.push(write);
        }
        targets.truncate(write);
        targets.shrink_to_fit();

        Ok(Self {
            offsets: compact,
            neighbors: targets,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of stored (directed) adjacency entries.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Row offsets, length `vertex_count() + 1`.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Ascending neighbors of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        let v = vertex as usize;
        &self.neighbors[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Degree of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn degree(&self, vertex: u32) -> usize {
        let v = vertex as usize;
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Whether `to` is in the row of `from`.
    pub fn has_edge(&self, from: u32, to: u32) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }
}

fn sort_rows(offsets: &[usize], targets: &mut [u32]) {
    let mut rows: Vec<&mut [u32]> = Vec::with_capacity(offsets.len().saturating_sub(1));
    let mut rest = targets;
    for w in offsets.windows(2) {
        let (row, tail) = core::mem::take(&mut rest).split_at_mut(w[1] - w[0]);
        rows.push(row);
        rest = tail;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows.par_iter_mut().for_each(|row| row.sort_unstable());
    }
    #[cfg(not(feature = "parallel"))]
    for row in &mut rows {
        row.sort_unstable();
    }
}
