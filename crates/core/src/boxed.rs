//! Type-erased contracts
//!
//! Combinator chains have long, unnameable types. Boxing erases them behind a
//! single trait object so contracts with different constructions but the same
//! shape can be stored together, returned from match arms, or passed to code
//! that is generic only over the argument tuple and result.
//!
//! Boxing adds no behavior: `f.boxed().invoke(args) == f.invoke(args)`.

use crate::contract::Contract;

/// A contract behind a trait object
///
/// `Box<C>` forwards [`Contract`], so a `BoxedContract` supports every
/// combinator an unboxed contract does.
pub type BoxedContract<Args, R, E> = Box<dyn Contract<Args, Output = R, Error = E> + Send + Sync>;
