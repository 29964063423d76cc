//! Property-based tests for the contract algebra
//!
//! Each property states an equation between two constructions and checks it
//! for arbitrary arguments, failing ones included.

use crate::common::*;
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn and_then_identity(s in arb_text(), n in -50i64..50) {
        let f = checked_len();
        let g = checked_len().and_then(|x| x);
        prop_assert_eq!(g.try_apply(s.clone(), n), f.try_apply(s, n));
    }

    #[test]
    fn and_then_associative(s in arb_text(), n in -50i64..50) {
        let double = |x: i64| x * 2;
        let shift = |x: i64| x - 7;

        let nested = checked_len().and_then(double).and_then(shift);
        let fused = checked_len().and_then(move |x| shift(double(x)));
        prop_assert_eq!(nested.try_apply(s.clone(), n), fused.try_apply(s, n));
    }

    #[test]
    fn partial_application_matches_full_call(s in arb_text(), n in -50i64..50) {
        let full = checked_len().try_apply(s.clone(), n);

        prop_assert_eq!(checked_len().partial_first(s.clone()).try_apply(n), full.clone());
        prop_assert_eq!(checked_len().partial_second(n).try_apply(s.clone()), full.clone());
        prop_assert_eq!(checked_len().partial_first(s.clone()).partial(n).try_get(), full.clone());
        prop_assert_eq!(checked_len().curry().apply(s).try_apply(n), full);
    }

    #[test]
    fn flip_is_an_involution(s in arb_text(), n in -50i64..50) {
        let twice = checked_len().flip().flip();
        prop_assert_eq!(twice.try_apply(s.clone(), n), checked_len().try_apply(s, n));
    }

    #[test]
    fn compose_with_identity_is_neutral(s in arb_text(), n in -50i64..50) {
        let composed = checked_len().compose(|x: String| x, |y: i64| y);
        prop_assert_eq!(composed.try_apply(s.clone(), n), checked_len().try_apply(s, n));
    }

    #[test]
    fn boxing_preserves_results(s in arb_text(), n in -50i64..50) {
        let boxed = checked_len().boxed();
        prop_assert_eq!(boxed.try_apply(s.clone(), n), checked_len().try_apply(s, n));
    }

    #[test]
    fn or_return_keeps_successes(s in arb_text(), n in -50i64..50, fallback in any::<i64>()) {
        let f = checked_len().or_return(fallback);
        let expected = checked_len().try_apply(s.clone(), n).unwrap_or(fallback);
        prop_assert_eq!(f.apply(s, n), expected);
    }

    #[test]
    fn memoize_is_transparent(calls in prop::collection::vec((arb_text(), -5i64..5), 1..40)) {
        let memo = checked_len().memoized();
        let memo_per_key = checked_len().memoized_with(&MemoConfig::per_key());

        for (s, n) in calls {
            let expected = checked_len().try_apply(s.clone(), n);
            prop_assert_eq!(memo.try_apply(s.clone(), n), expected.clone());
            prop_assert_eq!(memo_per_key.try_apply(s, n), expected);
        }
    }

    #[test]
    fn memoize_is_idempotent(keys in prop::collection::vec(0u16..20, 1..60)) {
        let calls = std::cell::Cell::new(0usize);
        let once = from_fn1(|k: u16| {
            calls.set(calls.get() + 1);
            u32::from(k) * 3
        })
        .memoized();
        let twice = memoize(memoize(&once));

        for &k in &keys {
            prop_assert_eq!(twice.apply(k), u32::from(k) * 3);
        }

        let distinct: std::collections::HashSet<_> = keys.iter().collect();
        prop_assert_eq!(calls.get(), distinct.len());
        prop_assert_eq!(once.len(), distinct.len());
    }
}
