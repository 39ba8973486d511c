//! Sequencing combinators.
//!
//! [`Combine`] commits once its head matches: a tail that does not match is
//! malformed input, not a reason to try something else. [`Bind`] picks the
//! next unit from the head's value and lets that unit govern its own
//! failure mode.

use tracing::debug;

use crate::combinator::Combinator;
use crate::error::{HardFailure, ParseResult};
use crate::modifier::Map;
use crate::restorable::Restorable;

/// Ordered pair of units; the tail's soft failure becomes a hard failure.
#[derive(Clone)]
pub struct Combine<A, B, E> {
    head: A,
    tail: B,
    make_failure: E,
}

impl<A, B, E> Combine<A, B, E>
where
    A: Combinator,
    B: Combinator<Context = A::Context>,
    E: Fn(&mut A::Context) -> HardFailure,
{
    pub fn new(head: A, tail: B, make_failure: E) -> Self {
        Combine {
            head,
            tail,
            make_failure,
        }
    }

    /// Keep only the head's value.
    pub fn first(self) -> Map<Self, fn((A::Output, B::Output)) -> A::Output> {
        let project: fn((A::Output, B::Output)) -> A::Output = |(head, _)| head;
        Map::new(self, project)
    }

    /// Keep only the tail's value.
    pub fn second(self) -> Map<Self, fn((A::Output, B::Output)) -> B::Output> {
        let project: fn((A::Output, B::Output)) -> B::Output = |(_, tail)| tail;
        Map::new(self, project)
    }
}

impl<A, B, E> Combinator for Combine<A, B, E>
where
    A: Combinator,
    B: Combinator<Context = A::Context>,
    E: Fn(&mut A::Context) -> HardFailure,
{
    type Context = A::Context;
    type Output = (A::Output, B::Output);

    fn parse(&self, context: &mut A::Context) -> ParseResult<Self::Output> {
        let Some(head) = self.head.parse(context)? else {
            return Ok(None);
        };
        if let Some(tail) = self.tail.parse(context)? {
            return Ok(Some((head, tail)));
        }
        let failure = (self.make_failure)(context);
        debug!(%failure, "sequence tail did not match after committed head");
        Err(failure)
    }
}

/// Monadic continuation: the next unit is computed from the head's value.
#[derive(Clone)]
pub struct Bind<A, F> {
    base: A,
    make_next: F,
}

impl<A, F> Bind<A, F> {
    pub fn new(base: A, make_next: F) -> Self {
        Bind { base, make_next }
    }
}

impl<A, F, N> Combinator for Bind<A, F>
where
    A: Combinator,
    A::Context: Restorable,
    F: Fn(A::Output) -> N,
    N: Combinator<Context = A::Context>,
{
    type Context = A::Context;
    type Output = N::Output;

    fn parse(&self, context: &mut A::Context) -> ParseResult<N::Output> {
        let start = context.backup();
        let Some(value) = self.base.parse(context)? else {
            return Ok(None);
        };
        let next = (self.make_next)(value);
        let result = next.parse(context)?;
        if result.is_none() {
            // the head consumed input; undo it so the soft failure is clean
            context.restore(start);
        }
        Ok(result)
    }
}
