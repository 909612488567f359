//! Slot allocators: the allocation contexts behind a resource manager.
//!
//! A context hands out stable `usize` slots for values of one type. Graph
//! storage keeps one context for vertices and one for arcs, and never cares
//! which strategy sits behind either:
//!
//! - [`SlotPool`]: released slots go on a free list and are reused, O(1).
//! - [`SlotArena`]: append-only; released slots become tombstones until the
//!   whole arena is [`reset`](SlotArena::reset).
//!
//! Both strategies honour an optional slot limit and report exhaustion as
//! [`AllocError`] rather than handing back a placeholder slot.

pub mod bump;
pub mod pool;

pub use bump::SlotArena;
pub use pool::SlotPool;

use crate::error::{AllocContext, AllocError};

/// Sentinel terminating a free list.
pub(crate) const NIL: usize = usize::MAX;

/// An allocation context for values of type `T`.
pub trait SlotAlloc<T> {
    /// Builds an empty context for `context` with `capacity` slots reserved
    /// and at most `limit` slots in use (`None` for unbounded).
    fn with_limits(context: AllocContext, capacity: usize, limit: Option<usize>) -> Self
    where
        Self: Sized;

    /// Stores `value`, returning its slot.
    ///
    /// # Errors
    /// Returns [`AllocError::Exhausted`] when the limit is reached.
    fn alloc(&mut self, value: T) -> Result<usize, AllocError>;

    /// Checks that `n` more allocations would succeed without performing them.
    ///
    /// # Errors
    /// Returns [`AllocError::Exhausted`] when they would not.
    fn ensure_room(&self, n: usize) -> Result<(), AllocError>;

    /// Releases the slot and returns its value, or `None` if it was not live.
    fn release(&mut self, index: usize) -> Option<T>;

    /// Shared access to a live slot.
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable access to a live slot.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Number of live values.
    fn len(&self) -> usize;

    /// Returns true if no value is live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One past the highest slot index ever handed out.
    ///
    /// Dense per-slot side tables (such as traversal marks) size themselves
    /// with this.
    fn slot_bound(&self) -> usize;
}

/// Checks `used + n` against `limit`, producing the error for `context`.
#[inline]
pub(crate) fn check_limit(
    context: AllocContext,
    used: usize,
    n: usize,
    limit: Option<usize>,
) -> Result<(), AllocError> {
    match limit {
        Some(limit) if used.saturating_add(n) > limit => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%context, limit, "allocation context exhausted");
            Err(AllocError::Exhausted { context, limit })
        }
        _ => Ok(()),
    }
}
