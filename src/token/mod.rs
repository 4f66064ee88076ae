//! `GhostToken` - the capability that scopes one counting run.
//!
//! A run of the [`Scheduler`](crate::Scheduler) happens inside `GhostToken::new`.
//! The shared state of that run (barrier, partial sums, result slots) carries the
//! token's `'brand`, so it can only be touched by workers that were handed the
//! same token and cannot outlive the run.

/// Invariant lifetime definitions for branding.
pub mod invariant;
/// Traits defining token capabilities.
pub mod traits;

pub use invariant::InvariantLifetime;
pub use traits::GhostBorrow;

/// A zero-sized token naming one counting run.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use halo_motif::GhostToken;
    ///
    /// let workers = GhostToken::new(|token| {
    ///     assert!(token.is_valid());
    ///     4
    /// });
    /// assert_eq!(workers, 4);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::default()))
    }

    /// Always `true` for a live token; usable in const contexts.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        true
    }
}

// `GhostToken<'brand>` holds no data. Sharing `&GhostToken<'brand>` between the
// workers of a run only grants access to branded state that is itself `Sync`.
unsafe impl<'brand> Sync for GhostToken<'brand> {}
