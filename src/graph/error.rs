//! Construction-time validation errors for the graph store.

use core::fmt;

/// Why a [`CsrGraph`](super::CsrGraph) or [`RootList`](super::RootList) was rejected.
///
/// The counting core never re-checks these invariants, so they are enforced once
/// here, before any worker starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `offsets` must have at least one entry (`V + 1` in total).
    EmptyOffsets,
    /// `offsets[0]` must be zero.
    OffsetsNotZeroBased,
    /// `offsets[vertex + 1] < offsets[vertex]`.
    OffsetsNotMonotone {
        /// First vertex whose row end precedes its start.
        vertex: usize,
    },
    /// The last offset does not match the number of neighbor entries.
    EdgeCountMismatch {
        /// `offsets.last()`.
        expected: usize,
        /// `neighbors.len()`.
        actual: usize,
    },
    /// A neighbor id is not a valid vertex index.
    NeighborOutOfBounds {
        /// Row (or edge source) holding the bad id.
        vertex: usize,
        /// The offending id.
        neighbor: u32,
    },
    /// A row is not strictly ascending.
    UnsortedAdjacency {
        /// Offending row.
        vertex: usize,
    },
    /// Vertex ids are `u32`; larger graphs cannot be addressed.
    TooManyVertices {
        /// Requested vertex count.
        count: usize,
    },
    /// A root id is not a valid vertex index.
    RootOutOfBounds {
        /// Position in the root list.
        position: usize,
        /// The offending id.
        root: u32,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyOffsets => f.write_str("offsets must have length vertex_count + 1"),
            Self::OffsetsNotZeroBased => f.write_str("offsets must start at 0"),
            Self::OffsetsNotMonotone { vertex } => {
                write!(f, "offsets decrease at vertex {vertex}")
            }
            Self::EdgeCountMismatch { expected, actual } => write!(
                f,
                "last offset is {expected} but {actual} neighbor entries were supplied"
            ),
            Self::NeighborOutOfBounds { vertex, neighbor } => {
                write!(f, "vertex {vertex} lists out-of-bounds neighbor {neighbor}")
            }
            Self::UnsortedAdjacency { vertex } => {
                write!(f, "neighbors of vertex {vertex} are not strictly ascending")
            }
            Self::TooManyVertices { count } => {
                write!(f, "{count} vertices do not fit in u32 vertex ids")
            }
            Self::RootOutOfBounds { position, root } => {
                write!(f, "root {root} at position {position} is not a vertex")
            }
        }
    }
}

impl std::error::Error for GraphError {}
