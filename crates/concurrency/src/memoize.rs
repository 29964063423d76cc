//! Memoization decorator
//!
//! `memoize(f)` wraps a contract with a cache keyed by its full argument tuple.
//! For every key the wrapped contract returns what `f` returns, and `f` runs
//! at most once per key for the lifetime of the wrapper, however many threads
//! ask concurrently.
//!
//! ## Guarantees
//!
//! - Declared errors pass through unchanged and are never cached. Calling
//!   again with the same key retries the computation.
//! - Panics in the delegate propagate unchanged and release the cache lock.
//! - Cached results are kept until the wrapper is dropped. The cache has no
//!   eviction and no TTL; callers that need a bounded cache must drop and
//!   rebuild the wrapper.
//! - Memoizing a contract that is already memoized adds no second cache. The
//!   new wrapper forwards straight to the existing one.
//!
//! ## Locking
//!
//! With the default [`MemoStrategy::GlobalLock`] every call, hit or miss, goes
//! through one lock that stays held while the delegate runs. A slow delegate
//! therefore stalls every caller of that wrapper. [`MemoStrategy::PerKey`]
//! keeps the at-most-once guarantee while letting distinct keys proceed in
//! parallel.
//!
//! ## Reentrancy
//!
//! The `GlobalLock` strategy's lock is a non-reentrant `parking_lot::Mutex`.
//! A delegate that calls back into the same wrapper (a recursive memoized
//! Fibonacci, say) deadlocks forever on its own thread; nothing detects it
//! and no error is raised. With `PerKey`, a delegate may call back for
//! *other* keys, since each key initializes independently. Calling back for
//! the key currently being computed never completes under either strategy.

use std::fmt;
use std::hash::Hash;

use lambdakit_core::Contract;
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::{MemoConfig, MemoStrategy};

/// A contract with a result cache
///
/// `Memoized` is `Send + Sync` whenever the delegate, arguments, and results
/// are, so one wrapper can be shared across threads behind an `Arc` or a
/// reference.
pub struct Memoized<F, Args>
where
    F: Contract<Args>,
    Args: Eq + Hash,
{
    delegate: F,
    // `None` when the delegate already memoizes
    cache: Option<CacheStore<Args, F::Output>>,
}

impl<F, Args> Memoized<F, Args>
where
    F: Contract<Args>,
    Args: Eq + Hash + Clone,
    F::Output: Clone,
{
    fn new(delegate: F, config: &MemoConfig) -> Self {
        if delegate.is_memoized() {
            debug!("Delegate already memoized, forwarding without a second cache");
            return Memoized {
                delegate,
                cache: None,
            };
        }

        debug!(
            strategy = ?config.strategy,
            initial_capacity = config.initial_capacity,
            "Creating memoized contract"
        );
        Memoized {
            delegate,
            cache: Some(CacheStore::from_config(config)),
        }
    }

    /// Number of cached results held by this wrapper
    ///
    /// A forwarding wrapper holds none of its own and reports 0.
    pub fn len(&self) -> usize {
        self.cache.as_ref().map_or(0, CacheStore::len)
    }

    /// Whether this wrapper holds no cached results
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locking strategy of this wrapper's own cache
    ///
    /// `None` for a forwarding wrapper around an already memoized contract.
    pub fn strategy(&self) -> Option<MemoStrategy> {
        self.cache.as_ref().map(CacheStore::strategy)
    }

    /// The wrapped contract
    pub fn delegate(&self) -> &F {
        &self.delegate
    }
}

impl<F, Args> Contract<Args> for Memoized<F, Args>
where
    F: Contract<Args>,
    Args: Eq + Hash + Clone,
    F::Output: Clone,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, args: Args) -> Result<F::Output, F::Error> {
        match &self.cache {
            Some(cache) => cache.get_or_try_insert_with(args, |args| {
                self.delegate.invoke(args).map_err(|err| {
                    debug!("Delegate failed, result not cached");
                    err
                })
            }),
            None => self.delegate.invoke(args),
        }
    }

    fn is_memoized(&self) -> bool {
        true
    }
}

impl<F, Args> fmt::Debug for Memoized<F, Args>
where
    F: Contract<Args> + fmt::Debug,
    Args: Eq + Hash + Clone,
    F::Output: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("delegate", &self.delegate)
            .field("strategy", &self.strategy())
            .field("len", &self.len())
            .finish()
    }
}

/// Memoize with the default configuration (single global lock)
pub fn memoize<F, Args>(contract: F) -> Memoized<F, Args>
where
    F: Contract<Args>,
    Args: Eq + Hash + Clone,
    F::Output: Clone,
{
    Memoized::new(contract, &MemoConfig::default())
}

/// Memoize with an explicit configuration
pub fn memoize_with<F, Args>(contract: F, config: &MemoConfig) -> Memoized<F, Args>
where
    F: Contract<Args>,
    Args: Eq + Hash + Clone,
    F::Output: Clone,
{
    Memoized::new(contract, config)
}

/// Method-call form of [`memoize`] and [`memoize_with`]
pub trait MemoizeExt<Args>: Contract<Args> + Sized
where
    Args: Eq + Hash + Clone,
    Self::Output: Clone,
{
    /// Memoize with the default configuration
    fn memoized(self) -> Memoized<Self, Args> {
        memoize(self)
    }

    /// Memoize with an explicit configuration
    fn memoized_with(self, config: &MemoConfig) -> Memoized<Self, Args> {
        memoize_with(self, config)
    }
}

impl<Args, C> MemoizeExt<Args> for C
where
    C: Contract<Args>,
    Args: Eq + Hash + Clone,
    C::Output: Clone,
{
}
