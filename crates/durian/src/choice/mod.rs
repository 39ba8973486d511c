//! Alternation combinators.
//!
//! Alternatives are tried in order from the same snapshot. A soft failure
//! means "not this one" and moves on; a hard failure means the input was
//! already committed to an alternative, so [`Choose`] and [`ChooseN`] stop
//! right there. [`TryCatch`] is the one exception: it recovers past
//! commitment, and should be placed deliberately.

use tracing::{debug, trace};

use crate::combinator::Combinator;
use crate::error::ParseResult;
use crate::restorable::Restorable;

/// Try `first`; on soft failure backtrack and try `second`.
#[derive(Clone, Debug)]
pub struct Choose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Choose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Choose { first, second }
    }
}

impl<A, B> Combinator for Choose<A, B>
where
    A: Combinator,
    A::Context: Restorable,
    B: Combinator<Context = A::Context, Output = A::Output>,
{
    type Context = A::Context;
    type Output = A::Output;

    fn parse(&self, context: &mut A::Context) -> ParseResult<A::Output> {
        let start = context.backup();
        if let Some(value) = self.first.parse(context)? {
            return Ok(Some(value));
        }
        trace!("first alternative did not match, backtracking");
        context.restore(start);
        self.second.parse(context)
    }
}

/// Ordered alternation over any number of candidates of one type.
///
/// Candidates of differing shapes are stored as
/// [`AnyCombinator`](crate::AnyCombinator)s.
#[derive(Clone, Debug)]
pub struct ChooseN<B> {
    candidates: Vec<B>,
}

impl<B> ChooseN<B> {
    pub fn new(candidates: impl IntoIterator<Item = B>) -> Self {
        ChooseN {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if there are no candidates; such an alternation
    /// always soft-fails.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<B> Combinator for ChooseN<B>
where
    B: Combinator,
    B::Context: Restorable,
{
    type Context = B::Context;
    type Output = B::Output;

    fn parse(&self, context: &mut B::Context) -> ParseResult<B::Output> {
        for (index, candidate) in self.candidates.iter().enumerate() {
            let snapshot = context.backup();
            if let Some(value) = candidate.parse(context)? {
                return Ok(Some(value));
            }
            trace!(index, "alternative did not match, backtracking");
            context.restore(snapshot);
        }
        Ok(None)
    }
}

/// Create a [`ChooseN`] over `candidates`, tried in iteration order.
pub fn one_of<B>(candidates: impl IntoIterator<Item = B>) -> ChooseN<B> {
    ChooseN::new(candidates)
}

/// Try `primary`; on any failure, hard or soft, backtrack and apply
/// `fallback`.
#[derive(Clone, Debug)]
pub struct TryCatch<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> TryCatch<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        TryCatch { primary, fallback }
    }
}

impl<A, B> Combinator for TryCatch<A, B>
where
    A: Combinator,
    A::Context: Restorable,
    B: Combinator<Context = A::Context, Output = A::Output>,
{
    type Context = A::Context;
    type Output = A::Output;

    fn parse(&self, context: &mut A::Context) -> ParseResult<A::Output> {
        let start = context.backup();
        match self.primary.parse(context) {
            Ok(Some(value)) => return Ok(Some(value)),
            Ok(None) => trace!("primary did not match, backtracking"),
            Err(failure) => debug!(%failure, "recovering from hard failure"),
        }
        context.restore(start);
        self.fallback.parse(context)
    }
}
