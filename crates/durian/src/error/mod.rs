//! Failure model for combinator parsing.
//!
//! Every parse produces a [`ParseResult`], a three-way outcome:
//!
//! | Value | Meaning | Recovered by |
//! |-------|---------|--------------|
//! | `Ok(Some(v))` | Matched and produced `v` | n/a |
//! | `Ok(None)` | Soft failure, this alternative does not apply | `or`, `one_of`, `maybe`, repetition |
//! | `Err(e)` | Hard failure, committed input is malformed | `or_catch` only |
//!
//! A soft failure must leave the context as it found it. Leaves honor this
//! by checking before consuming; composites honor it by restoring a
//! snapshot. A hard failure makes no such promise and unwinds through every
//! combinator except `TryCatch`.

use std::borrow::Cow;
use std::error::Error as StdError;

/// Outcome of a single parse.
pub type ParseResult<T> = Result<Option<T>, HardFailure>;

/// Boxed caller-supplied failure payload.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Factory used by committed sequences when their tail does not match.
///
/// The factory receives the context at the point of failure, so it can
/// record a position or inspect the offending input.
pub type FailureFn<C> = fn(&mut C) -> HardFailure;

/// An unrecoverable parse error.
#[derive(Debug, thiserror::Error)]
pub enum HardFailure {
    /// A committed sequence did not continue as required.
    #[error("unexpected input after a committed prefix")]
    Unexpected,

    /// A recursive rule ran before its definition was bound, or after the
    /// owning handle was dropped.
    #[error("recursive rule invoked without a definition")]
    UnboundRecursion,

    /// Plain diagnostic message.
    #[error("{0}")]
    Message(Cow<'static, str>),

    /// Caller-supplied payload.
    #[error(transparent)]
    Custom(BoxError),
}

impl HardFailure {
    /// Wrap a caller-defined error.
    pub fn custom<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Custom(Box::new(error))
    }

    /// Build a failure carrying only a message.
    #[cold]
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Borrow the custom payload as `E`, if that is what this failure carries.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Custom(error) => error.downcast_ref::<E>(),
            Self::Unexpected | Self::UnboundRecursion | Self::Message(_) => None,
        }
    }

    /// Returns `true` if the custom payload is an `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }
}

/// Default tail failure for committed sequences.
#[cold]
pub(crate) fn unexpected<C>(_context: &mut C) -> HardFailure {
    HardFailure::Unexpected
}

/// Error returned when binding a recursive rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// The rule already has a definition; definitions are never replaced.
    #[error("recursive rule is already defined")]
    AlreadyDefined,

    /// The handle outlived the rule it refers to.
    #[error("recursive rule no longer exists")]
    Dropped,
}
