//! Shared fixtures for unit tests.

use crate::primitive::{pop_first, PopFirst};

/// Pop exactly `expected` from a string context.
pub(crate) fn ch<'s>(expected: char) -> PopFirst<&'s str, impl Fn(&char) -> bool + Clone> {
    pop_first(move |c: &char| *c == expected)
}

/// Failure payload carrying a recognizable tag.
#[derive(Debug, thiserror::Error)]
#[error("tagged failure {tag}")]
pub(crate) struct TaggedError {
    pub(crate) tag: u32,
}
