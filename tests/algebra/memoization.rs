//! Memoization through the facade, single-threaded
//!
//! Multi-threaded behavior is covered by the concurrency crate's own suite.

use crate::common::*;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn memoize_runs_delegate_once() {
    init_tracing();
    let calls = AtomicUsize::new(0);
    let f = memoize(of2(|s: String, n: i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        if n < 0 {
            Err(Negative(n))
        } else {
            Ok(s.len() as i64 + n)
        }
    }));

    assert_eq!(f.try_apply("ab".to_string(), 3), Ok(5));
    assert_eq!(f.try_apply("ab".to_string(), 3), Ok(5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn memoize_keys_on_all_arguments() {
    let calls = AtomicUsize::new(0);
    let f = from_fn2(|a: u8, b: u8| {
        calls.fetch_add(1, Ordering::SeqCst);
        u16::from(a) * 256 + u16::from(b)
    })
    .memoized();

    assert_eq!(f.apply(1, 2), 258);
    assert_eq!(f.apply(2, 1), 513);
    assert_eq!(f.apply(1, 2), 258);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(f.len(), 2);
}

#[test]
fn memoize_optional_arguments_are_ordinary_keys() {
    let calls = Cell::new(0);
    let f = from_fn1(|name: Option<String>| {
        calls.set(calls.get() + 1);
        name.map_or(0, |n| n.len())
    })
    .memoized();

    assert_eq!(f.apply(None), 0);
    assert_eq!(f.apply(None), 0);
    assert_eq!(f.apply(Some("abc".to_string())), 3);
    assert_eq!(calls.get(), 2);
}

#[test]
fn memoize_does_not_cache_errors() {
    let calls = AtomicUsize::new(0);
    let f = of1(|n: i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        if n < 0 {
            Err(Negative(n))
        } else {
            Ok(n)
        }
    })
    .memoized();

    assert_eq!(f.try_apply(-1), Err(Negative(-1)));
    assert_eq!(f.try_apply(-1), Err(Negative(-1)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(f.is_empty());
}

#[test]
fn memoize_twice_adds_no_second_cache() {
    let calls = AtomicUsize::new(0);
    let inner = from_fn1(|n: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        n + 1
    })
    .memoized();
    let outer = memoize(inner);

    assert!(outer.is_memoized());
    assert_eq!(outer.strategy(), None);
    assert_eq!(outer.apply(1), 2);
    assert_eq!(outer.apply(1), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outer.delegate().len(), 1);
}

#[test]
fn memoize_recognizes_boxed_memoized_contract() {
    let boxed = from_fn1(|n: u32| n).memoized().boxed();
    let outer = memoize(boxed);
    assert_eq!(outer.strategy(), None);
    assert_eq!(outer.apply(3), 3);
}

#[test]
fn memoize_with_config_from_toml() {
    let config = MemoConfig::from_toml_str("strategy = \"per_key\"\ninitial_capacity = 8\n")
        .expect("valid config");
    let f = memoize_with(from_fn1(|n: i32| n * n), &config);
    assert_eq!(f.strategy(), Some(MemoStrategy::PerKey));
    assert_eq!(f.apply(-4), 16);
    assert_eq!(f.len(), 1);
}

#[test]
fn memoize_after_transparency() {
    let calls = AtomicUsize::new(0);
    let f = of1(|n: i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        if n < 0 {
            Err(Negative(n))
        } else {
            Ok(n)
        }
    })
    .or_return(0)
    .memoized();

    // Once the error is replaced by a value, that value is cached
    assert_eq!(f.apply(-1), 0);
    assert_eq!(f.apply(-1), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
