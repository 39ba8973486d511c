//! Modifiers: optional matching, repetition and result conversion.

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::combinator::Combinator;
use crate::error::{unexpected, FailureFn, HardFailure, ParseResult};
use crate::restorable::Restorable;

/// Optional match.
///
/// Matches `Some(value)` when the base matches and `None` (with the context
/// restored) when it soft-fails, so it never soft-fails itself. Hard
/// failures pass through.
#[derive(Clone, Debug)]
pub struct Maybe<A> {
    base: A,
}

impl<A> Maybe<A> {
    pub fn new(base: A) -> Self {
        Maybe { base }
    }
}

impl<A> Maybe<A>
where
    A: Combinator,
    A::Context: Restorable,
{
    /// Sequence the optional prefix with `next`, committing only when the
    /// prefix was present.
    ///
    /// If the prefix matched, a soft failure of `next` is escalated to
    /// [`HardFailure::Unexpected`]. If the prefix was absent, a soft failure
    /// of `next` stays soft.
    pub fn and_collapsing_soft_failures<B>(self, next: B) -> MaybeThen<A, B, FailureFn<A::Context>>
    where
        B: Combinator<Context = A::Context>,
    {
        let make_failure: FailureFn<A::Context> = unexpected::<A::Context>;
        MaybeThen {
            prefix: self,
            next,
            make_failure,
        }
    }

    /// Like [`and_collapsing_soft_failures`](Self::and_collapsing_soft_failures),
    /// building the hard failure with `make_failure`.
    pub fn and_collapsing_soft_failures_else<B, E>(
        self,
        next: B,
        make_failure: E,
    ) -> MaybeThen<A, B, E>
    where
        B: Combinator<Context = A::Context>,
        E: Fn(&mut A::Context) -> HardFailure,
    {
        MaybeThen {
            prefix: self,
            next,
            make_failure,
        }
    }
}

impl<A> Combinator for Maybe<A>
where
    A: Combinator,
    A::Context: Restorable,
{
    type Context = A::Context;
    type Output = Option<A::Output>;

    fn parse(&self, context: &mut A::Context) -> ParseResult<Option<A::Output>> {
        let start = context.backup();
        let value = self.base.parse(context)?;
        if value.is_none() {
            context.restore(start);
        }
        Ok(Some(value))
    }
}

/// Create a [`Maybe`] unit around `base`.
pub fn maybe<A: Combinator>(base: A) -> Maybe<A> {
    Maybe::new(base)
}

/// An optional prefix followed by a unit, committed only when the prefix
/// was present. Built by [`Maybe::and_collapsing_soft_failures`].
#[derive(Clone)]
pub struct MaybeThen<A, B, E> {
    prefix: Maybe<A>,
    next: B,
    make_failure: E,
}

impl<A, B, E> Combinator for MaybeThen<A, B, E>
where
    A: Combinator,
    A::Context: Restorable,
    B: Combinator<Context = A::Context>,
    E: Fn(&mut A::Context) -> HardFailure,
{
    type Context = A::Context;
    type Output = (Option<A::Output>, B::Output);

    fn parse(&self, context: &mut A::Context) -> ParseResult<Self::Output> {
        let Some(prefix) = self.prefix.parse(context)? else {
            return Ok(None);
        };
        match self.next.parse(context)? {
            Some(next) => Ok(Some((prefix, next))),
            None if prefix.is_some() => {
                let failure = (self.make_failure)(context);
                debug!(%failure, "unit after optional prefix did not match");
                Err(failure)
            }
            None => Ok(None),
        }
    }
}

/// Apply `base` until it soft-fails, collecting matches in order.
///
/// The final, failing attempt is rolled back. A hard failure discards
/// everything collected so far. A base that matches without consuming
/// input never soft-fails here, so the loop does not terminate.
fn collect<A>(base: &A, context: &mut A::Context) -> Result<Vec<A::Output>, HardFailure>
where
    A: Combinator,
    A::Context: Restorable,
{
    let mut items = Vec::new();
    loop {
        let snapshot = context.backup();
        let Some(item) = base.parse(context)? else {
            context.restore(snapshot);
            break;
        };
        items.push(item);
    }
    trace!(count = items.len(), "repetition stopped");
    Ok(items)
}

/// Repetition requiring at least one match.
#[derive(Clone, Debug)]
pub struct OneOrMany<A> {
    base: A,
}

impl<A> OneOrMany<A> {
    pub fn new(base: A) -> Self {
        OneOrMany { base }
    }
}

impl<A> Combinator for OneOrMany<A>
where
    A: Combinator,
    A::Context: Restorable,
{
    type Context = A::Context;
    type Output = Vec<A::Output>;

    fn parse(&self, context: &mut A::Context) -> ParseResult<Vec<A::Output>> {
        let items = collect(&self.base, context)?;
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items))
        }
    }
}

/// Create a [`OneOrMany`] unit around `base`.
pub fn one_or_many<A: Combinator>(base: A) -> OneOrMany<A> {
    OneOrMany::new(base)
}

/// Repetition accepting any number of matches, including none.
#[derive(Clone, Debug)]
pub struct ZeroOrMany<A> {
    base: A,
}

impl<A> ZeroOrMany<A> {
    pub fn new(base: A) -> Self {
        ZeroOrMany { base }
    }
}

impl<A> Combinator for ZeroOrMany<A>
where
    A: Combinator,
    A::Context: Restorable,
{
    type Context = A::Context;
    type Output = Vec<A::Output>;

    fn parse(&self, context: &mut A::Context) -> ParseResult<Vec<A::Output>> {
        collect(&self.base, context).map(Some)
    }
}

/// Create a [`ZeroOrMany`] unit around `base`.
pub fn zero_or_many<A: Combinator>(base: A) -> ZeroOrMany<A> {
    ZeroOrMany::new(base)
}

/// Infallible conversion of a matched value.
#[derive(Clone)]
pub struct Map<A, F> {
    base: A,
    f: F,
}

impl<A, F> Map<A, F> {
    pub fn new(base: A, f: F) -> Self {
        Map { base, f }
    }
}

impl<A, F, U> Combinator for Map<A, F>
where
    A: Combinator,
    F: Fn(A::Output) -> U,
{
    type Context = A::Context;
    type Output = U;

    #[inline]
    fn parse(&self, context: &mut A::Context) -> ParseResult<U> {
        Ok(self.base.parse(context)?.map(&self.f))
    }
}

/// Conversion of a matched value that may reject it.
///
/// The conversion sees the context just past the match, and its error is
/// the transform's hard failure (semantic validation of a literal, say).
pub struct Transform<A, F, U> {
    base: A,
    f: F,
    marker: PhantomData<fn() -> U>,
}

impl<A, F, U> Transform<A, F, U> {
    pub fn new(base: A, f: F) -> Self {
        Transform {
            base,
            f,
            marker: PhantomData,
        }
    }
}

impl<A: Clone, F: Clone, U> Clone for Transform<A, F, U> {
    fn clone(&self) -> Self {
        Transform::new(self.base.clone(), self.f.clone())
    }
}

impl<A, F, U> Combinator for Transform<A, F, U>
where
    A: Combinator,
    F: Fn(&mut A::Context, A::Output) -> Result<U, HardFailure>,
{
    type Context = A::Context;
    type Output = U;

    fn parse(&self, context: &mut A::Context) -> ParseResult<U> {
        match self.base.parse(context)? {
            Some(value) => (self.f)(context, value).map(Some),
            None => Ok(None),
        }
    }
}
