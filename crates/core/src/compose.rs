//! Composition algebra
//!
//! Pre-composition adapts inputs before the call, post-composition transforms
//! the output after it, and partial application binds one argument and leaves
//! a contract of lower arity. Declared errors pass through unchanged.
//!
//! Each combinator is a plain struct holding its operands, so a chain of
//! combinators is a single value with no heap allocation.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::contract::Contract;

/// Output transformed by a function (see [`ContractExt::and_then`](crate::ContractExt::and_then))
#[derive(Debug, Clone)]
pub struct AndThen<F, G> {
    inner: F,
    after: G,
}

impl<F, G> AndThen<F, G> {
    pub(crate) fn new(inner: F, after: G) -> Self {
        AndThen { inner, after }
    }
}

impl<Args, F, G, R> Contract<Args> for AndThen<F, G>
where
    F: Contract<Args>,
    G: Fn(F::Output) -> R,
{
    type Output = R;
    type Error = F::Error;

    fn invoke(&self, args: Args) -> Result<R, F::Error> {
        self.inner.invoke(args).map(&self.after)
    }
}

/// Output fed to a sink (see [`ContractExt::consume`](crate::ContractExt::consume))
#[derive(Debug, Clone)]
pub struct Consume<F, G> {
    inner: F,
    sink: G,
}

impl<F, G> Consume<F, G> {
    pub(crate) fn new(inner: F, sink: G) -> Self {
        Consume { inner, sink }
    }
}

impl<Args, F, G> Contract<Args> for Consume<F, G>
where
    F: Contract<Args>,
    G: Fn(F::Output),
{
    type Output = ();
    type Error = F::Error;

    fn invoke(&self, args: Args) -> Result<(), F::Error> {
        self.inner.invoke(args).map(&self.sink)
    }
}

/// Unary contract with an adapted input
#[derive(Debug, Clone)]
pub struct Compose1<F, G> {
    inner: F,
    before: G,
}

impl<F, G> Compose1<F, G> {
    pub(crate) fn new(inner: F, before: G) -> Self {
        Compose1 { inner, before }
    }
}

impl<X, A, F, G> Contract<(X,)> for Compose1<F, G>
where
    G: Fn(X) -> A,
    F: Contract<(A,)>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (x,): (X,)) -> Result<F::Output, F::Error> {
        self.inner.invoke(((self.before)(x),))
    }
}

/// Binary contract with both inputs adapted
#[derive(Debug, Clone)]
pub struct Compose2<F, G, H> {
    inner: F,
    first: G,
    second: H,
}

impl<F, G, H> Compose2<F, G, H> {
    pub(crate) fn new(inner: F, first: G, second: H) -> Self {
        Compose2 {
            inner,
            first,
            second,
        }
    }
}

impl<X, Y, A, B, F, G, H> Contract<(X, Y)> for Compose2<F, G, H>
where
    G: Fn(X) -> A,
    H: Fn(Y) -> B,
    F: Contract<(A, B)>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (x, y): (X, Y)) -> Result<F::Output, F::Error> {
        self.inner.invoke(((self.first)(x), (self.second)(y)))
    }
}

/// Unary contract with its argument bound
#[derive(Debug, Clone)]
pub struct Partial1<F, A> {
    inner: F,
    bound: A,
}

impl<F, A> Partial1<F, A> {
    pub(crate) fn new(inner: F, bound: A) -> Self {
        Partial1 { inner, bound }
    }
}

impl<F, A> Contract<()> for Partial1<F, A>
where
    F: Contract<(A,)>,
    A: Clone,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, _: ()) -> Result<F::Output, F::Error> {
        self.inner.invoke((self.bound.clone(),))
    }
}

/// Binary contract with its first argument bound
#[derive(Debug, Clone)]
pub struct PartialFirst<F, A> {
    inner: F,
    bound: A,
}

impl<F, A> PartialFirst<F, A> {
    pub(crate) fn new(inner: F, bound: A) -> Self {
        PartialFirst { inner, bound }
    }
}

impl<F, A, B> Contract<(B,)> for PartialFirst<F, A>
where
    F: Contract<(A, B)>,
    A: Clone,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (b,): (B,)) -> Result<F::Output, F::Error> {
        self.inner.invoke((self.bound.clone(), b))
    }
}

/// Binary contract with its second argument bound
#[derive(Debug, Clone)]
pub struct PartialSecond<F, B> {
    inner: F,
    bound: B,
}

impl<F, B> PartialSecond<F, B> {
    pub(crate) fn new(inner: F, bound: B) -> Self {
        PartialSecond { inner, bound }
    }
}

impl<F, A, B> Contract<(A,)> for PartialSecond<F, B>
where
    F: Contract<(A, B)>,
    B: Clone,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (a,): (A,)) -> Result<F::Output, F::Error> {
        self.inner.invoke((a, self.bound.clone()))
    }
}

/// Curried form of a binary contract
///
/// Applying it never fails; the returned contracts share the original.
pub struct Curry<F, B> {
    inner: Arc<F>,
    _second: PhantomData<fn(B)>,
}

impl<F, B> Curry<F, B> {
    pub(crate) fn new(inner: F) -> Self {
        Curry {
            inner: Arc::new(inner),
            _second: PhantomData,
        }
    }
}

impl<F, B> Clone for Curry<F, B> {
    fn clone(&self) -> Self {
        Curry {
            inner: Arc::clone(&self.inner),
            _second: PhantomData,
        }
    }
}

impl<F, A, B> Contract<(A,)> for Curry<F, B>
where
    F: Contract<(A, B)>,
    A: Clone,
{
    type Output = PartialFirst<Arc<F>, A>;
    type Error = std::convert::Infallible;

    fn invoke(&self, (a,): (A,)) -> Result<Self::Output, Self::Error> {
        Ok(PartialFirst::new(Arc::clone(&self.inner), a))
    }
}

/// Binary contract with its parameters swapped
#[derive(Debug, Clone)]
pub struct Flip<F> {
    inner: F,
}

impl<F> Flip<F> {
    pub(crate) fn new(inner: F) -> Self {
        Flip { inner }
    }
}

impl<F, A, B> Contract<(B, A)> for Flip<F>
where
    F: Contract<(A, B)>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn invoke(&self, (b, a): (B, A)) -> Result<F::Output, F::Error> {
        self.inner.invoke((a, b))
    }
}
