//! Bounded intersection of sorted neighbor rows.
//!
//! This is the innermost primitive of motif counting: it runs once per
//! (anchor, peer) edge and once per common neighbor of that edge, so it is a
//! single forward merge over both inputs and never allocates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// What to do when an intersection has more values than the scratch buffer holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the smallest `capacity` values and drop the rest. Counts that depend
    /// on a truncated buffer are under-counts.
    #[default]
    Truncate,
    /// Report a [`CapacityError`] instead of producing a partial result.
    Fail,
}

/// An intersection did not fit in its destination buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Capacity of the buffer that overflowed.
    pub capacity: usize,
    /// Lower bound on the true intersection size (`capacity + 1`).
    pub required_at_least: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "intersection needs at least {} slots but the scratch buffer holds {}",
            self.required_at_least, self.capacity
        )
    }
}

impl std::error::Error for CapacityError {}

/// A fixed-capacity, reusable output buffer for one worker.
///
/// The backing storage is reserved once in [`ScratchBuffer::with_capacity`] and
/// never grows afterwards.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    values: Vec<u32>,
    capacity: usize,
    truncated: bool,
}

impl ScratchBuffer {
    /// Creates an empty buffer holding at most `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
            truncated: false,
        }
    }

    /// Maximum number of ids this buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ids currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The held ids, ascending.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    /// Whether the last fill dropped values.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Empties the buffer without releasing storage.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
        self.truncated = false;
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    #[inline(always)]
    fn push(&mut self, value: u32) {
        debug_assert!(!self.is_full());
        self.values.push(value);
    }
}

/// Writes the ascending intersection of `a` and `b` into `dst` and returns its size.
///
/// Both inputs must be strictly ascending. `dst` is cleared first. When the
/// intersection exceeds `dst.capacity()`, `policy` decides: `Truncate` keeps the
/// smallest `capacity` values and marks the buffer truncated, `Fail` returns an
/// error and leaves `dst` holding the first `capacity` values.
///
/// Runs in \(O(|a| + |b|)\).
///
/// # Errors
/// [`CapacityError`] under [`OverflowPolicy::Fail`] when the result does not fit.
///
/// # Example
///
/// ```rust
/// use halo_motif::{intersect_into, OverflowPolicy, ScratchBuffer};
///
/// let mut dst = ScratchBuffer::with_capacity(8);
/// let n = intersect_into(&[1, 3, 5, 7], &[3, 4, 5, 8], &mut dst, OverflowPolicy::Truncate).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(dst.as_slice(), &[3, 5]);
/// ```
pub fn intersect_into(
    a: &[u32],
    b: &[u32],
    dst: &mut ScratchBuffer,
    policy: OverflowPolicy,
) -> Result<usize, CapacityError> {
    dst.clear();

    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        let (x, y) = (a[i], b[j]);
        if x < y {
            i += 1;
        } else if y < x {
            j += 1;
        } else {
            if dst.is_full() {
                match policy {
                    OverflowPolicy::Truncate => {
                        dst.truncated = true;
                        #[cfg(feature = "tracing")]
                        tracing::trace!(capacity = dst.capacity, "intersection truncated");
                        break;
                    }
                    OverflowPolicy::Fail => {
                        return Err(CapacityError {
                            capacity: dst.capacity,
                            required_at_least: dst.capacity + 1,
                        });
                    }
                }
            }
            dst.push(x);
            i += 1;
            j += 1;
        }
    }

    Ok(dst.len())
}

#[cfg(test)]
mod tests;
