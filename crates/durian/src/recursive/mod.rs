//! Recursive grammar rules and type erasure.
//!
//! A rule that mentions itself cannot be built by plain value composition:
//! its type would contain itself. [`Recursive`] breaks the cycle with a
//! shared cell that is bound to the rule's body exactly once, after the
//! body has been built around a handle to the cell.
//!
//! ```
//! use durian::{pop_first, Combinator, Recursive};
//!
//! // nested := '(' nested? ')'   -- counts nesting depth
//! let nested = Recursive::<&str, u32>::declare(|nested| {
//!     pop_first(|c: &char| *c == '(')
//!         .and(nested.maybe())
//!         .and(pop_first(|c: &char| *c == ')'))
//!         .map(|((_, inner), _)| 1 + inner.unwrap_or(0))
//! });
//!
//! let mut context = "((()))!";
//! assert_eq!(nested.parse(&mut context).ok(), Some(Some(3)));
//! assert_eq!(context, "!");
//! ```
//!
//! # Ownership
//!
//! The value returned by [`Recursive::declare`] or [`Recursive::new`] owns
//! the cell. The body should only hold [handles](Recursive::handle), which
//! refer to the cell weakly; otherwise the rule keeps itself alive forever.
//! Invoking a rule whose cell is unbound or gone is a
//! [`HardFailure::UnboundRecursion`].
//!
//! A rule's body is erased behind a trait object, so dropping the rule may
//! touch anything its context type borrows. Data borrowed by the context
//! (a token array behind a [`Cursor`](crate::Cursor), say) must therefore be
//! declared before the rule and outlive it.

mod any;
mod stack;

pub use any::AnyCombinator;

use std::cell::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

use crate::combinator::Combinator;
use crate::error::{BindError, HardFailure, ParseResult};

type Slot<'a, C, T> = OnceCell<AnyCombinator<'a, C, T>>;

enum Link<'a, C, T> {
    Owner(Rc<Slot<'a, C, T>>),
    Handle(Weak<Slot<'a, C, T>>),
}

/// A one-time-bound indirection to a rule's body.
pub struct Recursive<'a, C, T> {
    link: Link<'a, C, T>,
}

impl<'a, C, T> Recursive<'a, C, T> {
    /// Create an unbound rule. Bind it with [`define`](Self::define).
    pub fn new() -> Self {
        Recursive {
            link: Link::Owner(Rc::new(OnceCell::new())),
        }
    }

    /// Build a rule whose body may refer to the rule itself.
    ///
    /// `build` receives a handle to the rule and returns its body, which is
    /// bound immediately.
    pub fn declare<B, F>(build: F) -> Self
    where
        F: FnOnce(Recursive<'a, C, T>) -> B,
        B: Combinator<Context = C, Output = T> + 'a,
    {
        let rule = Self::new();
        let body = build(rule.handle());
        if rule.define(body).is_err() {
            warn!("recursive rule was defined while being declared, keeping the earlier definition");
        }
        rule
    }

    /// Build a rule bound to a parse function.
    ///
    /// Plain `fn` items can already call themselves, so this is the natural
    /// entry point for rules written as functions.
    pub fn from_fn<F>(parse: F) -> Self
    where
        F: Fn(&mut C) -> ParseResult<T> + 'a,
        C: 'a,
        T: 'a,
    {
        Recursive {
            link: Link::Owner(Rc::new(OnceCell::from(AnyCombinator::from_fn(parse)))),
        }
    }

    /// A weak handle to this rule, for use inside its own body.
    #[must_use]
    pub fn handle(&self) -> Self {
        let weak = match &self.link {
            Link::Owner(slot) => Rc::downgrade(slot),
            Link::Handle(weak) => Weak::clone(weak),
        };
        Recursive {
            link: Link::Handle(weak),
        }
    }

    /// Bind the rule's body. A rule is bound at most once.
    pub fn define<B>(&self, body: B) -> Result<(), BindError>
    where
        B: Combinator<Context = C, Output = T> + 'a,
    {
        let slot = self.slot().ok_or(BindError::Dropped)?;
        slot.set(AnyCombinator::new(body))
            .map_err(|_| BindError::AlreadyDefined)
    }

    /// Returns `true` once the rule has a body.
    pub fn is_defined(&self) -> bool {
        self.slot().is_some_and(|slot| slot.get().is_some())
    }

    fn slot(&self) -> Option<Rc<Slot<'a, C, T>>> {
        match &self.link {
            Link::Owner(slot) => Some(Rc::clone(slot)),
            Link::Handle(weak) => weak.upgrade(),
        }
    }
}

impl<C, T> Combinator for Recursive<'_, C, T> {
    type Context = C;
    type Output = T;

    fn parse(&self, context: &mut C) -> ParseResult<T> {
        let Some(slot) = self.slot() else {
            return Err(HardFailure::UnboundRecursion);
        };
        let Some(body) = slot.get() else {
            return Err(HardFailure::UnboundRecursion);
        };
        stack::ensure_sufficient_stack(|| body.parse(context))
    }
}

impl<C, T> Default for Recursive<'_, C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> Clone for Recursive<'_, C, T> {
    fn clone(&self) -> Self {
        let link = match &self.link {
            Link::Owner(slot) => Link::Owner(Rc::clone(slot)),
            Link::Handle(weak) => Link::Handle(Weak::clone(weak)),
        };
        Recursive { link }
    }
}

impl<C, T> fmt::Debug for Recursive<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recursive")
            .field("owner", &matches!(self.link, Link::Owner(_)))
            .field("defined", &self.is_defined())
            .finish()
    }
}
