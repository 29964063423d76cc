//! The single-method computation contract
//!
//! Every function shape in lambdakit is one trait, [`Contract`], parameterized
//! by its argument tuple:
//!
//! - `()` for suppliers (arity 0, produced by partial application)
//! - `(A,)` for unary functions
//! - `(A, B)` for binary functions
//!
//! A contract declares its failure type through `Error`. A contract with
//! `Error = Infallible` declares no error and exposes an infallible `apply`.
//!
//! ## Module Structure
//!
//! - [`Contract`]: the primitive `invoke` operation
//! - [`Supplier`], [`Function1`], [`Function2`]: positional calling and the
//!   arity-specific algebra (partial application, pre-composition, currying)
//! - [`ContractExt`]: arity-independent algebra (post-composition, the
//!   transparency layer, boxing)

use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::boxed::BoxedContract;
use crate::compose::{
    AndThen, Compose1, Compose2, Consume, Curry, Flip, Partial1, PartialFirst, PartialSecond,
};
use crate::transparency::{Nest, NestWith, OrReturn, Recover, Sneaky};

/// A computation from an argument tuple to a result
///
/// Contracts are immutable values. Every combinator consumes its operands and
/// returns a new contract; nothing is mutated in place.
pub trait Contract<Args> {
    /// Value produced on success
    type Output;

    /// Declared failure type (`Infallible` when the contract cannot fail)
    type Error;

    /// Run the computation
    ///
    /// # Errors
    ///
    /// Returns the contract's declared error when the computation fails.
    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error>;

    /// Whether this contract already caches its results
    ///
    /// Memoizers check this flag to avoid stacking a second cache on top of an
    /// existing one.
    fn is_memoized(&self) -> bool {
        false
    }
}

/// Unwrap a result that cannot hold an error
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<'a, Args, C> Contract<Args> for &'a C
where
    C: Contract<Args> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error> {
        (**self).invoke(args)
    }

    fn is_memoized(&self) -> bool {
        (**self).is_memoized()
    }
}

impl<Args, C> Contract<Args> for Box<C>
where
    C: Contract<Args> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error> {
        (**self).invoke(args)
    }

    fn is_memoized(&self) -> bool {
        (**self).is_memoized()
    }
}

impl<Args, C> Contract<Args> for Arc<C>
where
    C: Contract<Args> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error> {
        (**self).invoke(args)
    }

    fn is_memoized(&self) -> bool {
        (**self).is_memoized()
    }
}

/// Arity-0 contracts
pub trait Supplier: Contract<()> {
    /// Produce the value
    fn try_get(&self) -> Result<Self::Output, Self::Error> {
        self.invoke(())
    }

    /// Produce the value of a contract that cannot fail
    fn get(&self) -> Self::Output
    where
        Self: Contract<(), Error = Infallible>,
    {
        into_ok(self.invoke(()))
    }
}

impl<C: Contract<()>> Supplier for C {}

/// Arity-1 contracts
pub trait Function1<A>: Contract<(A,)> + Sized {
    /// Call with one argument
    fn try_apply(&self, a: A) -> Result<Self::Output, Self::Error> {
        self.invoke((a,))
    }

    /// Call a contract that cannot fail
    fn apply(&self, a: A) -> Self::Output
    where
        Self: Contract<(A,), Error = Infallible>,
    {
        into_ok(self.invoke((a,)))
    }

    /// Bind the argument, leaving a supplier
    fn partial(self, a: A) -> Partial1<Self, A>
    where
        A: Clone,
    {
        Partial1::new(self, a)
    }

    /// Adapt the input: `result(x) = self(before(x))`
    fn compose<X, G>(self, before: G) -> Compose1<Self, G>
    where
        G: Fn(X) -> A,
    {
        Compose1::new(self, before)
    }
}

impl<A, C: Contract<(A,)>> Function1<A> for C {}

/// Arity-2 contracts
pub trait Function2<A, B>: Contract<(A, B)> + Sized {
    /// Call with two arguments
    fn try_apply(&self, a: A, b: B) -> Result<Self::Output, Self::Error> {
        self.invoke((a, b))
    }

    /// Call a contract that cannot fail
    fn apply(&self, a: A, b: B) -> Self::Output
    where
        Self: Contract<(A, B), Error = Infallible>,
    {
        into_ok(self.invoke((a, b)))
    }

    /// Bind the first argument
    fn partial_first(self, a: A) -> PartialFirst<Self, A>
    where
        A: Clone,
    {
        PartialFirst::new(self, a)
    }

    /// Bind the second argument
    fn partial_second(self, b: B) -> PartialSecond<Self, B>
    where
        B: Clone,
    {
        PartialSecond::new(self, b)
    }

    /// Adapt both inputs: `result(x, y) = self(first(x), second(y))`
    fn compose<X, Y, G, H>(self, first: G, second: H) -> Compose2<Self, G, H>
    where
        G: Fn(X) -> A,
        H: Fn(Y) -> B,
    {
        Compose2::new(self, first, second)
    }

    /// Split into a unary contract returning unary contracts
    ///
    /// `f.curry().apply(a).try_apply(b)` equals `f.try_apply(a, b)`.
    fn curry(self) -> Curry<Self, B>
    where
        A: Clone,
    {
        Curry::new(self)
    }

    /// Swap the parameter positions
    fn flip(self) -> Flip<Self> {
        Flip::new(self)
    }
}

impl<A, B, C: Contract<(A, B)>> Function2<A, B> for C {}

/// Arity-independent combinators
///
/// Post-composition, the error transparency layer, and boxing work the same
/// way for every argument tuple.
pub trait ContractExt<Args>: Contract<Args> + Sized {
    /// Transform the output: `result(args) = after(self(args))`
    fn and_then<G, R>(self, after: G) -> AndThen<Self, G>
    where
        G: Fn(Self::Output) -> R,
    {
        AndThen::new(self, after)
    }

    /// Feed the output into a sink, producing `()`
    fn consume<G>(self, sink: G) -> Consume<Self, G>
    where
        G: Fn(Self::Output),
    {
        Consume::new(self, sink)
    }

    /// Raise declared errors as an unchecked [`NestedError`](crate::NestedError)
    fn nest(self) -> Nest<Self>
    where
        Self::Error: StdError + Send + Sync + 'static,
    {
        Nest::new(self)
    }

    /// Raise declared errors as whatever `mapper` builds from them
    fn nest_with<M, W>(self, mapper: M) -> NestWith<Self, M>
    where
        M: Fn(Self::Error) -> W,
        W: Send + 'static,
    {
        NestWith::new(self, mapper)
    }

    /// Replace failures with the result of a fallback contract
    ///
    /// The fallback is chosen by `recover_fn` from the error and invoked with
    /// the original arguments.
    fn recover<R, G>(self, recover_fn: R) -> Recover<Self, R>
    where
        Args: Clone,
        Self::Error: fmt::Display,
        R: Fn(&Self::Error) -> Option<G>,
        G: Contract<Args, Output = Self::Output, Error = Infallible>,
    {
        Recover::new(self, recover_fn)
    }

    /// Replace failures with a fixed value
    fn or_return(self, value: Self::Output) -> OrReturn<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OrReturn::new(self, value)
    }

    /// Re-raise declared errors unchanged as unchecked failures
    fn sneaky(self) -> Sneaky<Self>
    where
        Self::Error: Send + 'static,
    {
        Sneaky::new(self)
    }

    /// Erase the concrete type behind a trait object
    fn boxed(self) -> BoxedContract<Args, Self::Output, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<Args, C: Contract<Args>> ContractExt<Args> for C {}

/// Invoke any contract with its argument tuple
pub fn call<Args, C>(contract: &C, args: Args) -> Result<C::Output, C::Error>
where
    C: Contract<Args> + ?Sized,
{
    contract.invoke(args)
}
