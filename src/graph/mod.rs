//! Graph store: the shared, read-only input of a counting run.
//!
//! - `csr`: the compressed adjacency itself
//! - `roots`: the ordered anchor list
//! - `error`: construction-time validation

pub mod csr;
pub mod error;
pub mod roots;

pub use csr::CsrGraph;
pub use error::GraphError;
pub use roots::RootList;
