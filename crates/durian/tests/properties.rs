//! Property-based tests for the backtracking protocol.
//!
//! Contexts are short strings over a small alphabet so that every
//! combinator sees a healthy mix of matches, soft failures and hard
//! failures.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use durian::{
    apply, maybe, one_or_many, pop_first, zero_or_many, AnyCombinator, Combinator, PopFirst,
    PopFront,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn ch<'s>(expected: char) -> PopFirst<&'s str, impl Fn(&char) -> bool + Clone> {
    pop_first(move |c: &char| *c == expected)
}

/// A zoo of units with different failure behavior.
fn units<'s>() -> Vec<(&'static str, AnyCombinator<'s, &'s str, String>)> {
    vec![
        ("pop a", ch('a').map(String::from).erase()),
        (
            "a then b",
            ch('a').and(ch('b')).map(|(a, b)| format!("{a}{b}")).erase(),
        ),
        (
            "a+",
            one_or_many(ch('a')).map(|run| run.into_iter().collect()).erase(),
        ),
        (
            "a bind same",
            ch('a').bind(ch).map(String::from).erase(),
        ),
        (
            "a or b",
            ch('a').or(ch('b')).map(String::from).erase(),
        ),
        (
            "(ab)*",
            zero_or_many(ch('a').bind(|_| ch('b')))
                .map(|run| run.into_iter().collect())
                .erase(),
        ),
        (
            "any then c",
            apply(|context: &mut &'s str| Ok(context.pop_front()))
                .bind(|_| ch('c'))
                .map(String::from)
                .erase(),
        ),
    ]
}

fn input() -> impl Strategy<Value = String> {
    "[abc]{0,10}"
}

fn check_soft_failure_is_clean<'s>(
    name: &str,
    unit: &AnyCombinator<'s, &'s str, String>,
    input: &'s str,
) -> Result<(), TestCaseError> {
    let mut context = input;
    if let Ok(None) = unit.parse(&mut context) {
        prop_assert_eq!(context, input, "{} mutated the context on soft failure", name);
    }
    Ok(())
}

proptest! {
    #[test]
    fn soft_failure_leaves_context_untouched(input in input()) {
        for (name, unit) in &units() {
            check_soft_failure_is_clean(name, unit, &input)?;
        }
    }

    #[test]
    fn maybe_never_soft_fails(input in input()) {
        for (name, unit) in &units() {
            let mut alone = input.as_str();
            let bare = unit.parse(&mut alone);

            let mut optional = input.as_str();
            let wrapped = maybe(unit).parse(&mut optional);

            match (bare, wrapped) {
                (Ok(bare), Ok(Some(inner))) => {
                    prop_assert_eq!(bare.is_some(), inner.is_some(), "{}", name);
                    prop_assert_eq!(alone, optional, "{}", name);
                }
                (Err(_), Err(_)) => {}
                (bare, wrapped) => {
                    return Err(TestCaseError::fail(format!(
                        "{name}: bare {bare:?} vs maybe {wrapped:?}"
                    )));
                }
            }
        }
    }

    #[test]
    fn zero_or_many_of_unmatchable_is_empty(input in "[bc]{0,10}") {
        let mut context = input.as_str();
        let run = zero_or_many(ch('a')).parse(&mut context).unwrap();
        prop_assert_eq!(run, Some(Vec::new()));
        prop_assert_eq!(context, input.as_str());
    }

    #[test]
    fn one_or_many_counts_matches(n in 0usize..12, tail in "[bc]{0,5}") {
        let input = format!("{}{tail}", "a".repeat(n));
        let mut context = input.as_str();
        let run = one_or_many(ch('a')).parse(&mut context).unwrap();
        if n == 0 {
            prop_assert_eq!(run, None);
            prop_assert_eq!(context, input.as_str());
        } else {
            prop_assert_eq!(run.map(|r| r.len()), Some(n));
            prop_assert_eq!(context, tail.as_str());
        }
    }

    #[test]
    fn combine_does_not_undo_commitment(tail in "[ac]{0,6}") {
        let input = format!("a{tail}");
        let mut context = input.as_str();
        let result = ch('a').and(ch('b')).parse(&mut context);
        prop_assert!(result.is_err());
        prop_assert_eq!(context, tail.as_str());
    }

    #[test]
    fn choose_leaves_no_residue(tail in "[abc]{0,6}") {
        // consumes one character, then reports a soft failure anyway
        let sloppy = apply(|context: &mut &str| {
            context.pop_front();
            Ok(None)
        });
        let input = format!("b{tail}");

        let mut expected = input.as_str();
        let direct = ch('b').parse(&mut expected).unwrap();

        let mut context = input.as_str();
        let chosen = sloppy.or(ch('b')).parse(&mut context).unwrap();
        prop_assert_eq!(chosen, direct);
        prop_assert_eq!(context, expected);
    }
}
