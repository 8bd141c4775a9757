//! Bounded LIFO storage for edit history.

use tracing::trace;

use crate::error::{EditError, Result};

/// A stack with a hard capacity that never grows.
///
/// Below capacity it behaves like an ordinary stack. Once full, a push
/// overwrites the bottom element in slot 0 and makes that slot the logical
/// top; every other element keeps its slot and its relative order. The first
/// overflow therefore evicts the oldest element, but while the stack stays
/// wrapped slot 0 holds the most recent overflow, so further overflows keep
/// replacing it.
///
/// Elements live in a pre-allocated slot vector, bottom first, addressed
/// through an explicit top index. Unwrapped, the top is slot `len - 1`.
/// Wrapped, the top is slot 0 and the rest run from slot `len - 1` down to
/// slot 1. Popping the wrapped top shifts the survivors back down, so slot 0
/// is the bottom again as soon as the stack is no longer full.
pub struct FixedCapacityStack<T> {
    slots: Vec<Option<T>>,
    top: usize,
    len: usize,
}

impl<T> FixedCapacityStack<T> {
    /// Create an empty stack holding at most `capacity` elements.
    ///
    /// A capacity of zero is rejected with [`EditError::InvalidConfiguration`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EditError::InvalidConfiguration(
                "stack capacity must be at least 1".to_string(),
            ));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            top: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Whether an overflow has moved the top to slot 0 of a full stack.
    const fn is_wrapped(&self) -> bool {
        self.len > 1 && self.top == 0
    }

    /// Push `item` as the new top.
    ///
    /// Returns the element that was overwritten when the stack was already
    /// full, or `None` for an ordinary push.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            self.top = 0;
            let evicted = self.slots[0].replace(item);
            trace!(capacity = self.capacity(), "stack full, overwrote slot 0");
            return evicted;
        }
        // Not full means not wrapped: slots 0..len are occupied.
        self.slots[self.len] = Some(item);
        self.top = self.len;
        self.len += 1;
        None
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(EditError::EmptyStack);
        }
        let wrapped = self.is_wrapped();
        let item = self.slots[self.top].take().ok_or(EditError::EmptyStack)?;
        if wrapped {
            // Survivors sit in slots 1..len; move them back to 0..len - 1.
            self.slots[..self.len].rotate_left(1);
        }
        self.len -= 1;
        self.top = self.len.saturating_sub(1);
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.top].as_ref()
    }

    /// Iterate from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (head, rest) = if self.is_wrapped() {
            (Some(0), 1..self.len)
        } else {
            (None, 0..self.len)
        };
        head.into_iter()
            .chain(rest.rev())
            .filter_map(|slot| self.slots[slot].as_ref())
    }

    /// Drop every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.top = 0;
        self.len = 0;
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedCapacityStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedCapacityStack")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("top_down", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
