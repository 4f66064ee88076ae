//! Capability traits for run tokens.

use crate::token::GhostToken;

/// Proof that the holder participates in the branded run `'brand`.
///
/// Every worker of a counting run receives `&GhostToken<'brand>`, which is enough
/// to wait on the run's barrier and to publish into its result slots.
pub trait GhostBorrow<'brand> {}

impl<'brand> GhostBorrow<'brand> for GhostToken<'brand> {}
