//! The parse-unit abstraction.
//!
//! Every combinator implements [`Combinator`]: given exclusive access to a
//! context for the duration of one call, produce a [`ParseResult`]. Units
//! are plain values composed by value into a tree whose shape is fixed once
//! built. The provided methods are the builder surface for that tree:
//!
//! | Method | Builds | Policy |
//! |--------|--------|--------|
//! | `and` / `and_else` | [`Combine`] | tail soft failure becomes hard |
//! | `bind` | [`Bind`] | next unit chosen from the head's value |
//! | `or` | [`Choose`] | backtrack on soft failure only |
//! | `or_catch` | [`TryCatch`] | backtrack on any failure |
//! | `maybe` | [`Maybe`] | never soft-fails |
//! | `one_or_many` / `zero_or_many` | [`OneOrMany`] / [`ZeroOrMany`] | repeat until soft failure |
//! | `map` / `transform` | [`Map`] / [`Transform`] | post-process a match |
//! | `erase` | [`AnyCombinator`] | hide the concrete type |

use crate::choice::{Choose, TryCatch};
use crate::error::{unexpected, FailureFn, HardFailure, ParseResult};
use crate::modifier::{Map, Maybe, OneOrMany, Transform, ZeroOrMany};
use crate::recursive::AnyCombinator;
use crate::sequence::{Bind, Combine};

/// A composable parse unit.
pub trait Combinator {
    /// The input being parsed.
    type Context;

    /// The value produced on a match.
    type Output;

    /// Attempt to parse a value from `context`.
    ///
    /// Returns `Ok(None)` without touching `context` when the unit does not
    /// apply, and `Err` when committed input turned out to be malformed.
    fn parse(&self, context: &mut Self::Context) -> ParseResult<Self::Output>;

    /// Apply `self`, then `next`. A soft failure of `next` is escalated to
    /// [`HardFailure::Unexpected`].
    fn and<B>(self, next: B) -> Combine<Self, B, FailureFn<Self::Context>>
    where
        Self: Sized,
        B: Combinator<Context = Self::Context>,
    {
        let make_failure: FailureFn<Self::Context> = unexpected::<Self::Context>;
        Combine::new(self, next, make_failure)
    }

    /// Apply `self`, then `next`, building the hard failure with
    /// `make_failure` when `next` soft-fails.
    fn and_else<B, E>(self, next: B, make_failure: E) -> Combine<Self, B, E>
    where
        Self: Sized,
        B: Combinator<Context = Self::Context>,
        E: Fn(&mut Self::Context) -> HardFailure,
    {
        Combine::new(self, next, make_failure)
    }

    /// Apply `self`, then the unit `make_next` builds from its value.
    fn bind<N, F>(self, make_next: F) -> Bind<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> N,
        N: Combinator<Context = Self::Context>,
    {
        Bind::new(self, make_next)
    }

    /// Apply `self`, or backtrack and apply `other` if `self` soft-fails.
    fn or<B>(self, other: B) -> Choose<Self, B>
    where
        Self: Sized,
        B: Combinator<Context = Self::Context, Output = Self::Output>,
    {
        Choose::new(self, other)
    }

    /// Apply `self`, or backtrack and apply `fallback` if `self` fails in
    /// any way, hard failures included.
    fn or_catch<B>(self, fallback: B) -> TryCatch<Self, B>
    where
        Self: Sized,
        B: Combinator<Context = Self::Context, Output = Self::Output>,
    {
        TryCatch::new(self, fallback)
    }

    /// Convert the matched value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Convert the matched value with access to the context; the conversion
    /// may reject the value with a hard failure.
    fn transform<U, F>(self, f: F) -> Transform<Self, F, U>
    where
        Self: Sized,
        F: Fn(&mut Self::Context, Self::Output) -> Result<U, HardFailure>,
    {
        Transform::new(self, f)
    }

    /// Match `self` optionally.
    fn maybe(self) -> Maybe<Self>
    where
        Self: Sized,
    {
        Maybe::new(self)
    }

    /// Match `self` at least once.
    fn one_or_many(self) -> OneOrMany<Self>
    where
        Self: Sized,
    {
        OneOrMany::new(self)
    }

    /// Match `self` any number of times.
    fn zero_or_many(self) -> ZeroOrMany<Self>
    where
        Self: Sized,
    {
        ZeroOrMany::new(self)
    }

    /// Erase the concrete type of `self`.
    fn erase<'a>(self) -> AnyCombinator<'a, Self::Context, Self::Output>
    where
        Self: Sized + 'a,
    {
        AnyCombinator::new(self)
    }
}

impl<B> Combinator for &B
where
    B: Combinator + ?Sized,
{
    type Context = B::Context;
    type Output = B::Output;

    #[inline]
    fn parse(&self, context: &mut Self::Context) -> ParseResult<Self::Output> {
        (**self).parse(context)
    }
}

impl<B> Combinator for Box<B>
where
    B: Combinator + ?Sized,
{
    type Context = B::Context;
    type Output = B::Output;

    #[inline]
    fn parse(&self, context: &mut Self::Context) -> ParseResult<Self::Output> {
        (**self).parse(context)
    }
}
