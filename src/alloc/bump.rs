//! `SlotArena`: an append-only bump arena of slots.
//!
//! Slots are handed out in strictly increasing order and never reused while
//! the arena lives. Releasing a slot drops its value and leaves a tombstone;
//! memory comes back all at once through [`SlotArena::reset`]. This suits
//! build-once graphs (copies, snapshots) where individual frees are rare.

use super::{check_limit, SlotAlloc};
use crate::error::{AllocContext, AllocError};

/// An append-only slot arena.
#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    live: usize,
    context: AllocContext,
    limit: Option<usize>,
}

impl<T> SlotArena<T> {
    /// Creates an unbounded arena for `context`.
    pub fn new(context: AllocContext) -> Self {
        Self::with_limits(context, 0, None)
    }

    /// Drops every value and rewinds the bump cursor to slot zero.
    ///
    /// Every handle issued so far becomes invalid.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.live = 0;
    }

    /// Number of released slots awaiting a reset.
    pub fn tombstones(&self) -> usize {
        self.slots.len() - self.live
    }
}

impl<T> SlotAlloc<T> for SlotArena<T> {
    fn with_limits(context: AllocContext, capacity: usize, limit: Option<usize>) -> Self {
        let capacity = limit.map_or(capacity, |l| capacity.min(l));
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
            context,
            limit,
        }
    }

    #[inline]
    fn alloc(&mut self, value: T) -> Result<usize, AllocError> {
        check_limit(self.context, self.slots.len(), 1, self.limit)?;
        let idx = self.slots.len();
        self.slots.push(Some(value));
        self.live += 1;
        Ok(idx)
    }

    fn ensure_room(&self, n: usize) -> Result<(), AllocError> {
        check_limit(self.context, self.slots.len(), n, self.limit)
    }

    fn release(&mut self, index: usize) -> Option<T> {
        let value = self.slots.get_mut(index)?.take()?;
        self.live -= 1;
        Some(value)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    fn len(&self) -> usize {
        self.live
    }

    fn slot_bound(&self) -> usize {
        self.slots.len()
    }
}
