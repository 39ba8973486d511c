//! End-to-end behavior of each combinator over a string context.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use durian::{
    apply, maybe, one_of, one_or_many, pop_first, zero_or_many, Combinator, HardFailure, PopFirst,
    PopFront, Recursive, TryCatch,
};
use pretty_assertions::assert_eq;

fn ch<'s>(expected: char) -> PopFirst<&'s str, impl Fn(&char) -> bool + Clone> {
    pop_first(move |c: &char| *c == expected)
}

#[derive(Debug, thiserror::Error)]
#[error("tagged failure {tag}")]
struct TaggedError {
    tag: u32,
}

#[test]
fn apply_any_character() {
    let any_character = apply(|context: &mut &str| Ok(context.pop_front()));

    let mut context = "abc";
    assert_eq!(any_character.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "bc");
}

#[test]
fn bind_repeats_head() {
    let a_and_a = ch('a').bind(ch);

    let mut context = "aab";
    assert_eq!(a_and_a.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "b");
}

#[test]
fn choose_first_and_second() {
    let a_or_b = ch('a').or(ch('b'));

    let mut context = "abc";
    assert_eq!(a_or_b.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "bc");

    let mut context = "bac";
    assert_eq!(a_or_b.parse(&mut context).unwrap(), Some('b'));
    assert_eq!(context, "ac");
}

#[test]
fn choose_n_first_and_second() {
    let a_or_b = one_of([ch('a'), ch('b')]);

    let mut context = "abc";
    assert_eq!(a_or_b.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "bc");

    let mut context = "bac";
    assert_eq!(a_or_b.parse(&mut context).unwrap(), Some('b'));
    assert_eq!(context, "ac");
}

#[test]
fn combine_pops_a_then_b() {
    let a_and_b = ch('a').and(ch('b'));

    let mut context = "abc";
    assert_eq!(a_and_b.parse(&mut context).unwrap(), Some(('a', 'b')));
    assert_eq!(context, "c");
}

#[test]
fn combine_with_custom_hard_failure() {
    let a_and_b = ch('a').and_else(ch('b'), |_| HardFailure::custom(TaggedError { tag: 42 }));

    let mut context = "ac";
    let failure = a_and_b.parse(&mut context).unwrap_err();
    assert_eq!(failure.downcast_ref::<TaggedError>().unwrap().tag, 42);
    assert_eq!(context, "c");
}

#[test]
fn maybe_success_and_failure() {
    let maybe_a = maybe(ch('a'));

    let mut context = "abc";
    assert_eq!(maybe_a.parse(&mut context).unwrap(), Some(Some('a')));
    assert_eq!(context, "bc");

    let mut context = "bac";
    assert_eq!(maybe_a.parse(&mut context).unwrap(), Some(None));
    assert_eq!(context, "bac");
}

#[test]
fn maybe_collapsing() {
    let maybe_a_and_b = maybe(ch('a')).and_collapsing_soft_failures(ch('b'));

    let mut context = "cc";
    assert_eq!(maybe_a_and_b.parse(&mut context).unwrap(), None);
    assert_eq!(context, "cc");
}

#[test]
fn maybe_collapsing_with_custom_hard_failure() {
    let maybe_a_and_b = maybe(ch('a'))
        .and_collapsing_soft_failures_else(ch('b'), |_| HardFailure::custom(TaggedError { tag: 42 }));

    let mut context = "ac";
    let failure = maybe_a_and_b.parse(&mut context).unwrap_err();
    assert_eq!(failure.downcast_ref::<TaggedError>().unwrap().tag, 42);
    assert_eq!(context, "c");
}

#[test]
fn one_or_many_some_and_none() {
    let many_a = one_or_many(ch('a'));

    let mut context = "aabc";
    assert_eq!(many_a.parse(&mut context).unwrap(), Some(vec!['a', 'a']));
    assert_eq!(context, "bc");

    let mut context = "bac";
    assert_eq!(many_a.parse(&mut context).unwrap(), None);
    assert_eq!(context, "bac");
}

#[test]
fn zero_or_many_some_and_none() {
    let many_a = zero_or_many(ch('a'));

    let mut context = "aabc";
    assert_eq!(many_a.parse(&mut context).unwrap(), Some(vec!['a', 'a']));
    assert_eq!(context, "bc");

    let mut context = "bac";
    assert_eq!(many_a.parse(&mut context).unwrap(), Some(vec![]));
    assert_eq!(context, "bac");
}

#[test]
fn pop_first_single() {
    let a = ch('a');

    let mut context = "abc";
    assert_eq!(a.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "bc");
}

#[test]
fn recursive_prefix() {
    let prefix = Recursive::<&str, String>::declare(|prefix| {
        ch('a')
            .and(maybe(prefix))
            .map(|(head, tail): (char, Option<String>)| {
                format!("{head}{}", tail.unwrap_or_default())
            })
    });

    let mut context = "aabc";
    assert_eq!(prefix.parse(&mut context).unwrap(), Some("aa".to_string()));
    assert_eq!(context, "bc");
}

#[test]
fn transform_to_ascii() {
    let a_in_ascii = ch('a').transform(|_, c| {
        u8::try_from(c).map_err(|_| HardFailure::msg("not ascii"))
    });

    let mut context = "abc";
    assert_eq!(a_in_ascii.parse(&mut context).unwrap(), Some(97));
    assert_eq!(context, "bc");
}

fn a_and_b_or_b<'s>() -> impl Combinator<Context = &'s str, Output = String> {
    let a = ch('a').map(String::from);
    let b = ch('b').map(String::from);
    let a_and_b = a.and(b.clone()).map(|(a, b)| a + &b);
    TryCatch::new(a_and_b, b)
}

#[test]
fn try_catch_success() {
    let unit = a_and_b_or_b();

    let mut context = "abc";
    assert_eq!(unit.parse(&mut context).unwrap(), Some("ab".to_string()));
    assert_eq!(context, "c");
}

#[test]
fn try_catch_failure() {
    let unit = a_and_b_or_b();

    let mut context = "bac";
    assert_eq!(unit.parse(&mut context).unwrap(), Some("b".to_string()));
    assert_eq!(context, "ac");
}

#[test]
fn try_catch_with_fallback_pop_a() {
    let unit = ch('a').and(ch('b')).first().or_catch(ch('a'));

    let mut context = "abc";
    assert_eq!(unit.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "c");

    // `a` commits, `b` is missing; the fallback restarts from `a`
    let mut context = "acb";
    assert_eq!(unit.parse(&mut context).unwrap(), Some('a'));
    assert_eq!(context, "cb");

    let mut context = "bac";
    assert_eq!(unit.parse(&mut context).unwrap(), None);
    assert_eq!(context, "bac");
}
