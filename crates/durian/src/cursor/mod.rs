//! Positional context over a materialized slice.
//!
//! `&[T]` already works as a context, but it forgets where it came from.
//! [`Cursor`] keeps the full slice and an index into it, so grammars can
//! report how far they got and snapshots shrink to a single `usize`.

use crate::restorable::{PopFront, Restorable};
use tracing::trace;

/// Cursor over a slice of items (typically tokens).
pub struct Cursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

/// Saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pos: usize,
}

impl CursorSnapshot {
    /// Position captured by this snapshot.
    #[inline]
    pub fn position(self) -> usize {
        self.pos
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor at the start of `items`.
    pub fn new(items: &'a [T]) -> Self {
        Cursor { items, pos: 0 }
    }

    /// Number of items consumed so far.
    ///
    /// Compare positions before and after a parse to see how much input
    /// a unit consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Items not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.items.get(self.pos..).unwrap_or(&[])
    }

    /// Returns `true` once every item has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.items.len()
    }

    /// Current item, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// Consume and return the current item.
    pub fn advance(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.pos)?;
        trace!(pos = self.pos, "advance");
        self.pos += 1;
        Some(item)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.items == other.items
    }
}

impl<T> Restorable for Cursor<'_, T> {
    type Snapshot = CursorSnapshot;

    #[inline]
    fn backup(&self) -> CursorSnapshot {
        CursorSnapshot { pos: self.pos }
    }

    #[inline]
    fn restore(&mut self, snapshot: CursorSnapshot) {
        debug_assert!(
            snapshot.pos <= self.items.len(),
            "cursor snapshot {} out of bounds (max {})",
            snapshot.pos,
            self.items.len()
        );
        self.pos = snapshot.pos;
    }
}

impl<'a, T> PopFront for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn front(&self) -> Option<&'a T> {
        self.peek()
    }

    #[inline]
    fn pop_front(&mut self) -> Option<&'a T> {
        self.advance()
    }
}
