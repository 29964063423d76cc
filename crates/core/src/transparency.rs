//! Error transparency layer
//!
//! Turns a contract with a declared error into one with `Error = Infallible`,
//! so it can be used wherever a contract that cannot fail is expected. The
//! combinator chosen decides what happens to a declared error:
//!
//! | Combinator    | On `Err(e)`                                                 |
//! |---------------|-------------------------------------------------------------|
//! | `nest()`      | raise `NestedError` (message of `e`, `e` as source)         |
//! | `nest_with(m)`| raise `m(e)`                                                |
//! | `recover(r)`  | invoke the fallback `r(&e)` with the original arguments,    |
//! |               | or raise `UsageError` when `r` supplies none                |
//! | `or_return(v)`| return `v`                                                  |
//! | `sneaky()`    | raise `e` itself                                            |
//!
//! "Raise" means unwinding with the value as a typed panic payload, which a
//! caller can recover with `std::panic::catch_unwind` and `downcast`.
//!
//! ## Fatal conditions
//!
//! Panics coming out of the wrapped contract are never intercepted here. They
//! propagate exactly as raised, whichever policy is in effect.

use std::any::type_name;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;
use std::panic::panic_any;

use tracing::{debug, error};

use crate::contract::Contract;
use crate::error::{NestedError, UsageError};

/// Declared errors raised as [`NestedError`]
#[derive(Debug, Clone)]
pub struct Nest<F> {
    inner: F,
}

impl<F> Nest<F> {
    pub(crate) fn new(inner: F) -> Self {
        Nest { inner }
    }
}

impl<Args, F> Contract<Args> for Nest<F>
where
    F: Contract<Args>,
    F::Error: StdError + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<F::Output, Infallible> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(error = %err, error_type = type_name::<F::Error>(), "Raising nested error");
                panic_any(NestedError::new(err))
            }
        }
    }
}

/// Declared errors raised through a custom mapper
#[derive(Debug, Clone)]
pub struct NestWith<F, M> {
    inner: F,
    mapper: M,
}

impl<F, M> NestWith<F, M> {
    pub(crate) fn new(inner: F, mapper: M) -> Self {
        NestWith { inner, mapper }
    }
}

impl<Args, F, M, W> Contract<Args> for NestWith<F, M>
where
    F: Contract<Args>,
    M: Fn(F::Error) -> W,
    W: Send + 'static,
{
    type Output = F::Output;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<F::Output, Infallible> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(
                    error_type = type_name::<F::Error>(),
                    wrapper_type = type_name::<W>(),
                    "Raising mapped error"
                );
                panic_any((self.mapper)(err))
            }
        }
    }
}

/// Failures replaced by a fallback contract
#[derive(Debug, Clone)]
pub struct Recover<F, R> {
    inner: F,
    recover_fn: R,
}

impl<F, R> Recover<F, R> {
    pub(crate) fn new(inner: F, recover_fn: R) -> Self {
        Recover { inner, recover_fn }
    }
}

impl<Args, F, R, G> Contract<Args> for Recover<F, R>
where
    Args: Clone,
    F: Contract<Args>,
    F::Error: fmt::Display,
    R: Fn(&F::Error) -> Option<G>,
    G: Contract<Args, Output = F::Output, Error = Infallible>,
{
    type Output = F::Output;
    type Error = Infallible;

    /// # Panics
    ///
    /// Panics with a [`UsageError::MissingFallback`] payload when the
    /// recovery function returns `None`.
    fn invoke(&self, args: Args) -> Result<F::Output, Infallible> {
        let err = match self.inner.invoke(args.clone()) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match (self.recover_fn)(&err) {
            Some(fallback) => {
                debug!(error = %err, "Recovering with fallback contract");
                fallback.invoke(args)
            }
            None => {
                let usage = UsageError::missing_fallback(&err);
                error!(error = %usage, "Recovery function supplied no fallback");
                panic_any(usage)
            }
        }
    }
}

/// Failures replaced by a fixed value
#[derive(Debug, Clone)]
pub struct OrReturn<F, T> {
    inner: F,
    value: T,
}

impl<F, T> OrReturn<F, T> {
    pub(crate) fn new(inner: F, value: T) -> Self {
        OrReturn { inner, value }
    }
}

impl<Args, F, T> Contract<Args> for OrReturn<F, T>
where
    F: Contract<Args, Output = T>,
    T: Clone,
{
    type Output = T;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<T, Infallible> {
        Ok(self
            .inner
            .invoke(args)
            .unwrap_or_else(|_| self.value.clone()))
    }
}

/// Declared errors re-raised unchanged
#[derive(Debug, Clone)]
pub struct Sneaky<F> {
    inner: F,
}

impl<F> Sneaky<F> {
    pub(crate) fn new(inner: F) -> Self {
        Sneaky { inner }
    }
}

impl<Args, F> Contract<Args> for Sneaky<F>
where
    F: Contract<Args>,
    F::Error: Send + 'static,
{
    type Output = F::Output;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<F::Output, Infallible> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(error_type = type_name::<F::Error>(), "Re-raising declared error");
                panic_any(err)
            }
        }
    }
}
