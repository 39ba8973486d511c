//! Backtracking parser combinators over any restorable context.
//!
//! Grammars are built by composing small parse units, each implementing
//! [`Combinator`], into a tree of values. The tree is then driven against a
//! mutable context: a string slice, a token slice, a [`Cursor`], or any
//! caller type implementing [`Restorable`].
//!
//! # Failure model
//!
//! Parsing distinguishes two kinds of failure (see [`ParseResult`]):
//!
//! - **Soft** (`Ok(None)`): this alternative does not apply here. The
//!   context is left as it was, and alternation moves on.
//! - **Hard** (`Err(HardFailure)`): the input committed to a path and then
//!   broke. Ordinary alternation does not catch it; only
//!   [`or_catch`](Combinator::or_catch) does.
//!
//! Sequences commit once their first element matches: in `a.and(b)`, a
//! soft failure of `b` becomes a hard failure.
//!
//! # Example
//!
//! ```
//! use durian::{pop_first, Combinator};
//!
//! let a = pop_first::<&str, _>(|c: &char| *c == 'a');
//! let b = pop_first::<&str, _>(|c: &char| *c == 'b');
//! let unit = a.one_or_many().and(b);
//!
//! let mut context = "aabc";
//! let parsed = unit.parse(&mut context).ok().flatten();
//! assert_eq!(parsed, Some((vec!['a', 'a'], 'b')));
//! assert_eq!(context, "c");
//!
//! let mut context = "aac";
//! assert!(unit.parse(&mut context).is_err());
//! ```
//!
//! # Logging
//!
//! Backtracking and failure escalation are reported through `tracing`
//! (`trace` and `debug` levels). The crate installs no subscriber.
//!
//! # Features
//!
//! - `stack-growth` (default): grow the native stack on demand while
//!   descending through [`Recursive`] rules.

mod choice;
mod combinator;
mod cursor;
mod error;
mod modifier;
mod primitive;
mod recursive;
mod restorable;
mod sequence;

#[cfg(test)]
mod test_support;

pub use choice::{one_of, Choose, ChooseN, TryCatch};
pub use combinator::Combinator;
pub use cursor::{Cursor, CursorSnapshot};
pub use error::{BindError, BoxError, FailureFn, HardFailure, ParseResult};
pub use modifier::{
    maybe, one_or_many, zero_or_many, Map, Maybe, MaybeThen, OneOrMany, Transform, ZeroOrMany,
};
pub use primitive::{apply, pop_first, Apply, PopFirst};
pub use recursive::{AnyCombinator, Recursive};
pub use restorable::{PopFront, Restorable};
pub use sequence::{Bind, Combine};
