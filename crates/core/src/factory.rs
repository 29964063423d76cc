//! Constructors for contracts
//!
//! Closures become contracts through these factories:
//!
//! - `of1` / `of2` take closures that already return `Result` and keep their
//!   declared error type
//! - `from_fn1` / `from_fn2` take plain closures and declare no error
//!
//! The remaining factories build contracts that ignore some or all of their
//! arguments.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::contract::Contract;

/// Contract over a closure returning `Result`
pub struct Of<F, Args> {
    f: F,
    _args: PhantomData<fn(Args)>,
}

impl<F: Clone, Args> Clone for Of<F, Args> {
    fn clone(&self) -> Self {
        Of {
            f: self.f.clone(),
            _args: PhantomData,
        }
    }
}

impl<F, Args> fmt::Debug for Of<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Of").finish_non_exhaustive()
    }
}

impl<R, E, F> Contract<()> for Of<F, ()>
where
    F: Fn() -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn invoke(&self, _: ()) -> Result<R, E> {
        (self.f)()
    }
}

impl<A, R, E, F> Contract<(A,)> for Of<F, (A,)>
where
    F: Fn(A) -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn invoke(&self, (a,): (A,)) -> Result<R, E> {
        (self.f)(a)
    }
}

impl<A, B, R, E, F> Contract<(A, B)> for Of<F, (A, B)>
where
    F: Fn(A, B) -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn invoke(&self, (a, b): (A, B)) -> Result<R, E> {
        (self.f)(a, b)
    }
}

/// Supplier from a closure returning `Result`
pub fn of0<R, E, F>(f: F) -> Of<F, ()>
where
    F: Fn() -> Result<R, E>,
{
    Of {
        f,
        _args: PhantomData,
    }
}

/// Unary contract from a closure returning `Result`
pub fn of1<A, R, E, F>(f: F) -> Of<F, (A,)>
where
    F: Fn(A) -> Result<R, E>,
{
    Of {
        f,
        _args: PhantomData,
    }
}

/// Binary contract from a closure returning `Result`
pub fn of2<A, B, R, E, F>(f: F) -> Of<F, (A, B)>
where
    F: Fn(A, B) -> Result<R, E>,
{
    Of {
        f,
        _args: PhantomData,
    }
}

/// Contract over a closure that cannot fail
pub struct FromFn<F, Args> {
    f: F,
    _args: PhantomData<fn(Args)>,
}

impl<F: Clone, Args> Clone for FromFn<F, Args> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _args: PhantomData,
        }
    }
}

impl<F, Args> fmt::Debug for FromFn<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<A, R, F> Contract<(A,)> for FromFn<F, (A,)>
where
    F: Fn(A) -> R,
{
    type Output = R;
    type Error = Infallible;

    fn invoke(&self, (a,): (A,)) -> Result<R, Infallible> {
        Ok((self.f)(a))
    }
}

impl<A, B, R, F> Contract<(A, B)> for FromFn<F, (A, B)>
where
    F: Fn(A, B) -> R,
{
    type Output = R;
    type Error = Infallible;

    fn invoke(&self, (a, b): (A, B)) -> Result<R, Infallible> {
        Ok((self.f)(a, b))
    }
}

/// Unary contract from a plain closure
pub fn from_fn1<A, R, F>(f: F) -> FromFn<F, (A,)>
where
    F: Fn(A) -> R,
{
    FromFn {
        f,
        _args: PhantomData,
    }
}

/// Binary contract from a plain closure
pub fn from_fn2<A, B, R, F>(f: F) -> FromFn<F, (A, B)>
where
    F: Fn(A, B) -> R,
{
    FromFn {
        f,
        _args: PhantomData,
    }
}

/// Contract of any arity that ignores its arguments
pub struct Constant<T, Args> {
    value: T,
    _args: PhantomData<fn(Args)>,
}

impl<T: Clone, Args> Clone for Constant<T, Args> {
    fn clone(&self) -> Self {
        Constant {
            value: self.value.clone(),
            _args: PhantomData,
        }
    }
}

impl<T: fmt::Debug, Args> fmt::Debug for Constant<T, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value).finish()
    }
}

impl<T: Clone, Args> Contract<Args> for Constant<T, Args> {
    type Output = T;
    type Error = Infallible;

    fn invoke(&self, _: Args) -> Result<T, Infallible> {
        Ok(self.value.clone())
    }
}

/// Contract returning a clone of `value` for every argument tuple
pub fn constant<T: Clone, Args>(value: T) -> Constant<T, Args> {
    Constant {
        value,
        _args: PhantomData,
    }
}

/// Unary contract returning its argument
pub struct Identity<T> {
    _arg: PhantomData<fn(T) -> T>,
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T> Contract<(T,)> for Identity<T> {
    type Output = T;
    type Error = Infallible;

    fn invoke(&self, (t,): (T,)) -> Result<T, Infallible> {
        Ok(t)
    }
}

/// Contract returning its argument unchanged
pub fn identity<T>() -> Identity<T> {
    Identity { _arg: PhantomData }
}

/// Binary contract that only looks at its first argument
#[derive(Debug, Clone)]
pub struct OnlyFirst<F> {
    inner: F,
}

impl<F, A, B> Contract<(A, B)> for OnlyFirst<F>
where
    F: Contract<(A,)>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (a, _): (A, B)) -> Result<F::Output, F::Error> {
        self.inner.invoke((a,))
    }
}

/// Binary contract from a unary one, ignoring the second argument
pub fn only_first<F>(inner: F) -> OnlyFirst<F> {
    OnlyFirst { inner }
}

/// Binary contract that only looks at its second argument
#[derive(Debug, Clone)]
pub struct OnlySecond<F> {
    inner: F,
}

impl<F, A, B> Contract<(A, B)> for OnlySecond<F>
where
    F: Contract<(B,)>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (_, b): (A, B)) -> Result<F::Output, F::Error> {
        self.inner.invoke((b,))
    }
}

/// Binary contract from a unary one, ignoring the first argument
pub fn only_second<F>(inner: F) -> OnlySecond<F> {
    OnlySecond { inner }
}
