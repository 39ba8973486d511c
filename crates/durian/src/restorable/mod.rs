//! Context capabilities required by the combinators.
//!
//! [`Restorable`] is what makes backtracking possible: alternation and
//! optional matching take a snapshot before trying a unit and reset to it
//! when the unit soft-fails. [`PopFront`] is only needed by
//! [`PopFirst`](crate::PopFirst).

/// A context that can be snapshotted and reset.
///
/// `restore(backup())` must be a no-op, and restoring a snapshot must undo
/// every mutation made since it was taken, however many nested units ran.
pub trait Restorable {
    /// Opaque saved state.
    type Snapshot;

    /// Capture the current state.
    fn backup(&self) -> Self::Snapshot;

    /// Reset to a previously captured state.
    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// A sequence-like context with a removable front element.
pub trait PopFront {
    /// Element type handed out by the context.
    type Item;

    /// Look at the front element without consuming it.
    fn front(&self) -> Option<Self::Item>;

    /// Remove and return the front element.
    fn pop_front(&mut self) -> Option<Self::Item>;
}

impl<'a> Restorable for &'a str {
    type Snapshot = &'a str;

    #[inline]
    fn backup(&self) -> &'a str {
        let &text = self;
        text
    }

    #[inline]
    fn restore(&mut self, snapshot: &'a str) {
        *self = snapshot;
    }
}

impl<'a> PopFront for &'a str {
    type Item = char;

    #[inline]
    fn front(&self) -> Option<char> {
        self.chars().next()
    }

    fn pop_front(&mut self) -> Option<char> {
        let mut chars = std::mem::take(self).chars();
        let first = chars.next()?;
        *self = chars.as_str();
        Some(first)
    }
}

impl<'a, T> Restorable for &'a [T] {
    type Snapshot = &'a [T];

    #[inline]
    fn backup(&self) -> &'a [T] {
        let &items = self;
        items
    }

    #[inline]
    fn restore(&mut self, snapshot: &'a [T]) {
        *self = snapshot;
    }
}

impl<'a, T> PopFront for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn front(&self) -> Option<&'a T> {
        let &items = self;
        items.first()
    }

    fn pop_front(&mut self) -> Option<&'a T> {
        let (first, rest) = std::mem::take(self).split_first()?;
        *self = rest;
        Some(first)
    }
}
