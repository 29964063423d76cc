//! Lambdakit - composable function contracts
//!
//! Lambdakit models unary and binary functions as values of a single trait,
//! [`Contract`], and layers three things on top:
//!
//! - an algebra for composing, partially applying, and currying contracts
//! - a thread-safe memoizer that runs each argument tuple at most once
//! - an error transparency layer that lets a contract with a declared error
//!   stand in where an infallible one is expected
//!
//! # Quick Start
//!
//! ```
//! use lambdakit::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Negative(i64);
//!
//! impl std::fmt::Display for Negative {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "negative: {}", self.0)
//!     }
//! }
//!
//! let f = of2(|s: String, n: i64| {
//!     if n < 0 { Err(Negative(n)) } else { Ok(s.len() as i64 + n) }
//! });
//! assert_eq!(f.try_apply("ab".to_string(), 3), Ok(5));
//!
//! // Memoize, then make it infallible with a fallback
//! let safe = f.memoized().recover(|_| Some(constant(-1)));
//! assert_eq!(safe.apply("ab".to_string(), 3), 5);
//! assert_eq!(safe.apply("ab".to_string(), -1), -1);
//! ```
//!
//! # Architecture
//!
//! The stateless algebra lives in `lambdakit-core`. Memoization, which is the
//! only combinator with shared mutable state, lives in
//! `lambdakit-concurrency`. This crate re-exports both.

pub use lambdakit_concurrency::*;
pub use lambdakit_core::*;

/// Traits, factories, and the memoizer for glob import
pub mod prelude {
    pub use lambdakit_concurrency::{memoize, memoize_with, MemoConfig, MemoStrategy, MemoizeExt};
    pub use lambdakit_core::prelude::*;
}
