//! Concurrency layer for lambdakit
//!
//! This crate adds the one combinator that needs shared state:
//! - Memoized: a contract wrapped with a thread-safe result cache
//! - Caches: a single-lock cache and a per-key cache
//! - MemoConfig: strategy selection, loadable from TOML
//!
//! A memoized contract runs its delegate at most once per argument tuple, does
//! not cache declared errors, and never stacks a second cache on a contract
//! that is already memoized.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod cache;
pub mod config;
pub mod memoize;

// Re-export commonly used types
pub use cache::{GlobalLockCache, PerKeyCache};
pub use config::{ConfigError, MemoConfig, MemoStrategy};
pub use memoize::{memoize, memoize_with, MemoizeExt, Memoized};
