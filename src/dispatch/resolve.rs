//! The capability resolver.
//!
//! [`Resolve`] is implemented by the two route tags. `Terminal` calls the
//! descriptor's kernel. `Inherit` upcasts to the ancestor and resolves again
//! one level shallower. At depth `Z` the `Inherit` impl demands
//! [`DelegationDepthExceeded`], which nothing implements, so a chain that
//! never terminates fails on that bound rather than searching further. There
//! is no catch-all impl: a missing route, a missing kernel, or a chain that
//! never terminates is a build error.
//!
//! # Build-time failures
//!
//! No route for the operation:
//!
//! ```compile_fail,E0277
//! use capmath::prelude::*;
//!
//! #[derive(Descriptor)]
//! struct Bare;
//!
//! let _ = remainder(&Bare, 5.5_f64, 2.0_f64);
//! ```
//!
//! A terminal route without a kernel for the operand types:
//!
//! ```compile_fail,E0277
//! use capmath::prelude::*;
//!
//! #[derive(Descriptor)]
//! #[descriptor(terminal(Remainder))]
//! struct OnlyF64;
//!
//! impl RemainderKernel<f64, f64> for OnlyF64 {
//!     type Output = f64;
//!     fn remainder(&self, x: f64, y: f64) -> f64 {
//!         x % y
//!     }
//! }
//!
//! let _ = remainder(&OnlyF64, 5_i32, 2_i32);
//! ```
//!
//! A descriptor that is its own ancestor:
//!
//! ```compile_fail,E0277
//! use capmath::prelude::*;
//!
//! struct Loop;
//!
//! impl Descriptor for Loop {}
//!
//! impl Refinement for Loop {
//!     type Ancestor = Loop;
//!     fn ancestor(&self) -> &Loop {
//!         self
//!     }
//! }
//!
//! impl Route<Remainder> for Loop {
//!     type Via = Inherit;
//! }
//!
//! let _ = remainder(&Loop, 5.5_f64, 2.0_f64);
//! ```
//!
//! An ancestor cycle:
//!
//! ```compile_fail,E0277
//! use capmath::prelude::*;
//!
//! struct Ping;
//! struct Pong;
//!
//! impl Descriptor for Ping {}
//! impl Descriptor for Pong {}
//!
//! impl Refinement for Ping {
//!     type Ancestor = Pong;
//!     fn ancestor(&self) -> &Pong {
//!         &Pong
//!     }
//! }
//!
//! impl Refinement for Pong {
//!     type Ancestor = Ping;
//!     fn ancestor(&self) -> &Ping {
//!         &Ping
//!     }
//! }
//!
//! impl Route<Remainder> for Ping {
//!     type Via = Inherit;
//! }
//!
//! impl Route<Remainder> for Pong {
//!     type Via = Inherit;
//! }
//!
//! let _ = remainder(&Ping, 5.5_f64, 2.0_f64);
//! ```
//!
//! A legitimate chain longer than the depth budget it is resolved with:
//!
//! ```compile_fail,E0277
//! use capmath::prelude::*;
//! use capmath::primitives::D1;
//! use capmath::Resolve;
//!
//! #[derive(Descriptor)]
//! #[descriptor(terminal(Min))]
//! struct Root;
//!
//! impl MinKernel<u8, u8> for Root {
//!     type Output = u8;
//!     fn min(&self, x: u8, y: u8) -> u8 {
//!         x.min(y)
//!     }
//! }
//!
//! #[derive(Descriptor)]
//! #[descriptor(inherit(Min))]
//! struct Mid(#[ancestor] Root);
//!
//! #[derive(Descriptor)]
//! #[descriptor(inherit(Min))]
//! struct Leaf(#[ancestor] Mid);
//!
//! let _ = <Inherit as Resolve<Min, Leaf, (u8, u8), D1>>::HOPS;
//! ```

use super::descriptor::{Descriptor, Refinement};
use super::route::{Inherit, Invoke, Operation, Route, Terminal};
use crate::primitives::depth::{MaxDelegationDepth, S, Z};
use core::convert::Infallible;

/// Resolve `Op` for descriptor `T` with operands `Args`, allowing at most
/// `Depth` further delegation hops.
#[diagnostic::on_unimplemented(
    message = "cannot resolve `{Op}` for descriptor `{T}` with operands `{Args}`",
    label = "no terminal implementation reachable from `{T}`",
    note = "the ancestor chain must reach a descriptor routing `{Op}` via `Terminal` within `MaxDelegationDepth` hops"
)]
pub trait Resolve<Op, T: ?Sized, Args, Depth> {
    /// Value returned by the terminal kernel.
    type Output;

    /// The descriptor whose kernel runs.
    type Resolver: Descriptor;

    /// Delegation hops taken before reaching the terminal.
    const HOPS: usize;

    fn resolve(descriptor: &T, args: Args) -> Self::Output;
}

impl<Op, T, Args, D> Resolve<Op, T, Args, D> for Terminal
where
    T: Descriptor,
    Op: Invoke<T, Args>,
{
    type Output = <Op as Invoke<T, Args>>::Output;
    type Resolver = T;
    const HOPS: usize = 0;

    #[inline(always)]
    fn resolve(descriptor: &T, args: Args) -> Self::Output {
        <Op as Invoke<T, Args>>::invoke(descriptor, args)
    }
}

impl<Op, T, Args, D> Resolve<Op, T, Args, S<D>> for Inherit
where
    Op: Operation,
    T: Refinement,
    T::Ancestor: Route<Op>,
    <T::Ancestor as Route<Op>>::Via: Resolve<Op, T::Ancestor, Args, D>,
{
    type Output = <<T::Ancestor as Route<Op>>::Via as Resolve<Op, T::Ancestor, Args, D>>::Output;
    type Resolver = <<T::Ancestor as Route<Op>>::Via as Resolve<Op, T::Ancestor, Args, D>>::Resolver;
    const HOPS: usize =
        1 + <<T::Ancestor as Route<Op>>::Via as Resolve<Op, T::Ancestor, Args, D>>::HOPS;

    #[inline(always)]
    fn resolve(descriptor: &T, args: Args) -> Self::Output {
        <<T::Ancestor as Route<Op>>::Via as Resolve<Op, T::Ancestor, Args, D>>::resolve(
            descriptor.ancestor(),
            args,
        )
    }
}

/// Bound on the `Inherit` impl at depth `Z`. It has no impls and cannot be
/// implemented outside this module.
#[diagnostic::on_unimplemented(
    message = "delegation of `{Op}` from `{Self}` exceeds `MaxDelegationDepth`",
    label = "`{Self}` still routes `{Op}` via `Inherit` after the last allowed hop",
    note = "a descriptor that is its own ancestor, or an ancestor cycle, never reaches a `Terminal` route",
    note = "route `{Op}` via `Terminal` somewhere in the chain, or shorten it"
)]
pub trait DelegationDepthExceeded<Op>: sealed::Unreachable {
    fn unreachable(&self) -> Infallible;
}

mod sealed {
    pub trait Unreachable {}
}

impl<Op, T, Args> Resolve<Op, T, Args, Z> for Inherit
where
    Op: Operation,
    T: Descriptor + DelegationDepthExceeded<Op>,
{
    type Output = Infallible;
    type Resolver = T;
    const HOPS: usize = 0;

    fn resolve(descriptor: &T, _args: Args) -> Infallible {
        descriptor.unreachable()
    }
}

/// Output of `Op` resolved for descriptor `T` and operands `Args`.
pub type Resolved<Op, T, Args> =
    <<T as Route<Op>>::Via as Resolve<Op, T, Args, MaxDelegationDepth>>::Output;

/// Generic entry point shared by every operation function.
///
/// ```
/// use capmath::prelude::*;
/// use capmath::dispatch;
///
/// #[derive(Descriptor)]
/// #[descriptor(terminal(Max))]
/// struct Scalar;
///
/// impl MaxKernel<i32, i32> for Scalar {
///     type Output = i32;
///     fn max(&self, x: i32, y: i32) -> i32 {
///         if x > y { x } else { y }
///     }
/// }
///
/// #[derive(Descriptor)]
/// #[descriptor(inherit(Max))]
/// struct Wide(#[ancestor] Scalar);
///
/// assert_eq!(dispatch::<Max, _, _>(&Wide(Scalar), (3, 7)), 7);
/// ```
#[inline(always)]
pub fn dispatch<Op, T, Args>(descriptor: &T, args: Args) -> Resolved<Op, T, Args>
where
    Op: Operation,
    T: Route<Op>,
    T::Via: Resolve<Op, T, Args, MaxDelegationDepth>,
{
    <T::Via as Resolve<Op, T, Args, MaxDelegationDepth>>::resolve(descriptor, args)
}

/// Number of delegation hops between `T` and the descriptor that computes `Op`.
pub const fn hops<Op, T, Args>() -> usize
where
    Op: Operation,
    T: Route<Op>,
    T::Via: Resolve<Op, T, Args, MaxDelegationDepth>,
{
    <T::Via as Resolve<Op, T, Args, MaxDelegationDepth>>::HOPS
}

/// Type name of the descriptor that computes `Op` on behalf of `T`.
pub fn resolver_name<Op, T, Args>() -> &'static str
where
    Op: Operation,
    T: Route<Op>,
    T::Via: Resolve<Op, T, Args, MaxDelegationDepth>,
{
    core::any::type_name::<<T::Via as Resolve<Op, T, Args, MaxDelegationDepth>>::Resolver>()
}
