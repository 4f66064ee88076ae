use core::marker::PhantomData;

/// A marker that is invariant in its lifetime parameter `'id`.
///
/// Run state branded with `'id` cannot be shrunk or widened by subtyping, so the
/// barrier and result slots of one counting run never unify with another run's.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
