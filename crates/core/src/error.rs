//! Error types for lambdakit contracts
//!
//! Failures fall into three categories:
//!
//! 1. **Declared errors**: the `Err(E)` side of a contract's `Result`. These pass
//!    through composition and memoization untouched.
//! 2. **Unchecked failures**: panics raised on purpose by the transparency layer
//!    (`nest`, `sneaky`) so a contract can drop its declared error type. The
//!    panic payload is a typed value that callers may downcast.
//! 3. **Fatal conditions**: any other panic. Nothing in this workspace catches
//!    them, so they always propagate unmodified.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Unchecked wrapper raised by `nest()`
///
/// Carries the display message of the original error and the original error
/// itself as its `source()`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NestedError {
    message: String,
    #[source]
    cause: Box<dyn StdError + Send + Sync + 'static>,
}

impl NestedError {
    /// Wrap an error, copying its message
    pub fn new<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        NestedError {
            message: cause.to_string(),
            cause: Box::new(cause),
        }
    }

    /// Message copied from the wrapped error
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Borrow the wrapped error as its concrete type, if it is one
    pub fn downcast_cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    /// Take back the wrapped error as its concrete type
    ///
    /// Returns `self` unchanged when the cause has a different type.
    pub fn into_cause<E: StdError + 'static>(self) -> Result<E, Self> {
        let NestedError { message, cause } = self;
        match cause.downcast::<E>() {
            Ok(e) => Ok(*e),
            Err(cause) => Err(NestedError { message, cause }),
        }
    }
}

/// Invalid-usage diagnostics
///
/// These describe programmer errors in how a contract was assembled, not
/// failures of the computation itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A recovery function declined to supply a fallback contract
    #[error("recovery function returned no fallback for {error_type}: {message}")]
    MissingFallback {
        /// Type name of the error being recovered from
        error_type: &'static str,
        /// Display message of that error
        message: String,
    },
}

impl UsageError {
    /// Build a `MissingFallback` diagnostic naming `err`'s type and message
    pub fn missing_fallback<E: fmt::Display>(err: &E) -> Self {
        UsageError::MissingFallback {
            error_type: type_name::<E>(),
            message: err.to_string(),
        }
    }
}
