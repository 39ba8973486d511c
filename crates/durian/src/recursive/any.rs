//! Type-erased combinators.

use std::fmt;
use std::rc::Rc;

use crate::combinator::Combinator;
use crate::error::ParseResult;
use crate::primitive::Apply;

/// A combinator with its concrete type erased.
///
/// Needed wherever static composition would produce an infinite type
/// (recursive rules) or where units of different shapes share a collection
/// (the candidates of [`ChooseN`](crate::ChooseN)). Cloning is cheap and
/// shares the underlying unit.
pub struct AnyCombinator<'a, C, T> {
    inner: Rc<dyn Combinator<Context = C, Output = T> + 'a>,
}

impl<'a, C, T> AnyCombinator<'a, C, T> {
    /// Erase `base`.
    pub fn new<B>(base: B) -> Self
    where
        B: Combinator<Context = C, Output = T> + 'a,
    {
        AnyCombinator {
            inner: Rc::new(base),
        }
    }

    /// Erase a bare parse function.
    pub fn from_fn<F>(parse: F) -> Self
    where
        F: Fn(&mut C) -> ParseResult<T> + 'a,
        C: 'a,
        T: 'a,
    {
        AnyCombinator::new(Apply::new(parse))
    }
}

impl<C, T> Combinator for AnyCombinator<'_, C, T> {
    type Context = C;
    type Output = T;

    #[inline]
    fn parse(&self, context: &mut C) -> ParseResult<T> {
        self.inner.parse(context)
    }
}

impl<C, T> Clone for AnyCombinator<'_, C, T> {
    fn clone(&self) -> Self {
        AnyCombinator {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C, T> fmt::Debug for AnyCombinator<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyCombinator").finish_non_exhaustive()
    }
}
