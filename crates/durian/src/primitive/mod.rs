//! Leaf combinators.

use std::fmt;
use std::marker::PhantomData;

use crate::combinator::Combinator;
use crate::error::ParseResult;
use crate::restorable::PopFront;

/// Wraps a function as a parse unit.
///
/// The outcome is exactly what the function returns, so the function is
/// responsible for leaving the context untouched when it reports a soft
/// failure.
pub struct Apply<C, T, F> {
    f: F,
    marker: PhantomData<fn(&mut C) -> T>,
}

impl<C, T, F> Apply<C, T, F>
where
    F: Fn(&mut C) -> ParseResult<T>,
{
    pub fn new(f: F) -> Self {
        Apply {
            f,
            marker: PhantomData,
        }
    }
}

impl<C, T, F> Combinator for Apply<C, T, F>
where
    F: Fn(&mut C) -> ParseResult<T>,
{
    type Context = C;
    type Output = T;

    #[inline]
    fn parse(&self, context: &mut C) -> ParseResult<T> {
        (self.f)(context)
    }
}

impl<C, T, F: Clone> Clone for Apply<C, T, F> {
    fn clone(&self) -> Self {
        Apply {
            f: self.f.clone(),
            marker: PhantomData,
        }
    }
}

impl<C, T, F> fmt::Debug for Apply<C, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply").finish_non_exhaustive()
    }
}

/// Create an [`Apply`] unit from `f`.
pub fn apply<C, T, F>(f: F) -> Apply<C, T, F>
where
    F: Fn(&mut C) -> ParseResult<T>,
{
    Apply::new(f)
}

/// Pops the front element of the context if it satisfies a predicate.
///
/// Soft-fails without consuming anything when the context is empty or the
/// front element is rejected. Never fails hard.
pub struct PopFirst<C, P> {
    predicate: P,
    marker: PhantomData<fn(&mut C)>,
}

impl<C, P> PopFirst<C, P>
where
    C: PopFront,
    P: Fn(&C::Item) -> bool,
{
    pub fn new(predicate: P) -> Self {
        PopFirst {
            predicate,
            marker: PhantomData,
        }
    }
}

impl<C, P> Combinator for PopFirst<C, P>
where
    C: PopFront,
    P: Fn(&C::Item) -> bool,
{
    type Context = C;
    type Output = C::Item;

    fn parse(&self, context: &mut C) -> ParseResult<C::Item> {
        match context.front() {
            Some(front) if (self.predicate)(&front) => Ok(context.pop_front()),
            _ => Ok(None),
        }
    }
}

impl<C, P: Clone> Clone for PopFirst<C, P> {
    fn clone(&self) -> Self {
        PopFirst {
            predicate: self.predicate.clone(),
            marker: PhantomData,
        }
    }
}

impl<C, P> fmt::Debug for PopFirst<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopFirst").finish_non_exhaustive()
    }
}

/// Create a [`PopFirst`] unit accepting elements for which `predicate` holds.
pub fn pop_first<C, P>(predicate: P) -> PopFirst<C, P>
where
    C: PopFront,
    P: Fn(&C::Item) -> bool,
{
    PopFirst::new(predicate)
}
