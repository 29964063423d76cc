//! Core contract types for lambdakit
//!
//! This crate defines the single-method computation contract and everything
//! that works on it without shared state:
//! - Contract: the computation trait, generic over its argument tuple
//! - Function1 / Function2 / Supplier: positional calling per arity
//! - Composition: and_then, consume, compose, partial application, currying
//! - Factories: of1/of2, from_fn1/from_fn2, constant, identity, only_first/only_second
//! - Transparency: nest, recover, or_return, sneaky
//! - Boxing: BoxedContract trait objects
//! - Error: NestedError and UsageError
//!
//! Memoization lives in `lambdakit-concurrency`.
//!
//! # Example
//!
//! ```
//! use lambdakit_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct Negative;
//!
//! let f = of2(|s: String, n: i64| {
//!     if n < 0 { Err(Negative) } else { Ok(s.len() as i64 + n) }
//! });
//! assert_eq!(f.try_apply("ab".to_string(), 3).ok(), Some(5));
//!
//! let safe = f.recover(|_| Some(constant(-1)));
//! assert_eq!(safe.apply("ab".to_string(), -1), -1);
//! # impl std::fmt::Display for Negative {
//! #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//! #         f.write_str("negative")
//! #     }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod boxed;
pub mod compose;
pub mod contract;
pub mod error;
pub mod factory;
pub mod transparency;

// Re-export commonly used types and traits
pub use boxed::BoxedContract;
pub use compose::{
    AndThen, Compose1, Compose2, Consume, Curry, Flip, Partial1, PartialFirst, PartialSecond,
};
pub use contract::{call, into_ok, Contract, ContractExt, Function1, Function2, Supplier};
pub use error::{NestedError, UsageError};
pub use factory::{
    constant, from_fn1, from_fn2, identity, of0, of1, of2, only_first, only_second, Constant,
    FromFn, Identity, Of, OnlyFirst, OnlySecond,
};
pub use transparency::{Nest, NestWith, OrReturn, Recover, Sneaky};

/// Traits and factories for glob import
pub mod prelude {
    pub use crate::contract::{call, Contract, ContractExt, Function1, Function2, Supplier};
    pub use crate::factory::{
        constant, from_fn1, from_fn2, identity, of0, of1, of2, only_first, only_second,
    };
}
