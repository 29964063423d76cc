//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Once;

pub use lambdakit::prelude::*;
pub use lambdakit::{BoxedContract, Constant, NestedError, UsageError};
use tracing_subscriber::filter::LevelFilter;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows with
/// `--nocapture` and stays silent otherwise.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Declared error used across suites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negative(pub i64);

impl fmt::Display for Negative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "negative argument: {}", self.0)
    }
}

impl std::error::Error for Negative {}

/// Fatal condition: a panic payload no combinator may intercept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfMemory;

/// `f(s, n) = len(s) + n`, failing with `Negative` when `n < 0`
pub fn checked_len() -> impl Contract<(String, i64), Output = i64, Error = Negative> + Clone {
    of2(|s: String, n: i64| {
        if n < 0 {
            Err(Negative(n))
        } else {
            Ok(s.len() as i64 + n)
        }
    })
}

/// A unary contract whose only behavior is raising a fatal condition
pub fn fatal() -> impl Contract<(i64,), Output = i64, Error = Negative> + Clone {
    of1(|_: i64| -> Result<i64, Negative> { std::panic::panic_any(OutOfMemory) })
}

// ============================================================================
// Panic helpers
// ============================================================================

/// Run `f` and return its panic payload, failing the test if it returns
pub fn expect_panic<T>(f: impl FnOnce() -> T) -> Box<dyn Any + Send> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic, call returned normally"),
        Err(payload) => payload,
    }
}

/// Whether the payload carries the fatal marker untouched
pub fn is_fatal(payload: &(dyn Any + Send)) -> bool {
    payload.downcast_ref::<OutOfMemory>() == Some(&OutOfMemory)
}

/// Unwrap a result that cannot fail
pub fn ok<T>(result: Result<T, Infallible>) -> T {
    lambdakit::into_ok(result)
}
