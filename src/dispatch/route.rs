//! Operations, kernels and route tags.
//!
//! Rust has no stable graded specialization, so the choice between a
//! backend's own implementation and delegation is made by a tag: each
//! descriptor names exactly one [`Strategy`] per operation through
//! [`Route`]. Coherence allows one `Route<Op>` impl per descriptor, so the
//! selection can never be ambiguous.
//!
//! ```text
//! remainder(&d, x, y)
//!     |
//!     v
//! <D as Route<Remainder>>::Via
//!     |-- Terminal --> <Remainder as Invoke<D, (x, y)>>::invoke   (done)
//!     '-- Inherit  --> d.ancestor() --> <Ancestor as Route<Remainder>>::Via ...
//! ```

use super::descriptor::Descriptor;

/// A named math primitive (remainder, sqrt, ...).
///
/// Implemented by the zero-sized marker types generated by
/// [`binary_op!`](crate::binary_op) and [`unary_op!`](crate::unary_op).
pub trait Operation: 'static {
    /// Name of the entry-point function.
    const NAME: &'static str;
}

/// Bridge from an operation marker to the kernel a descriptor implements.
///
/// `Args` is the operand tuple: `(Tx, Ty)` for binary operations and `(Tx,)`
/// for unary ones.
#[diagnostic::on_unimplemented(
    message = "`{T}` has no `{Self}` kernel for operands `{Args}`",
    label = "no terminal implementation of `{Self}` for these operand types",
    note = "implement the operation's kernel trait for `{T}` with these operand types, or route the operation via `Inherit` to an ancestor that has one"
)]
pub trait Invoke<T: ?Sized, Args>: Operation {
    type Output;

    fn invoke(descriptor: &T, args: Args) -> Self::Output;
}

/// The resolver binding of one descriptor for one operation.
#[diagnostic::on_unimplemented(
    message = "descriptor `{Self}` has no route for `{Op}`",
    label = "`{Self}` does not declare how it resolves `{Op}`",
    note = "list `{Op}` in `#[descriptor(terminal(..))]` or `#[descriptor(inherit(..))]`"
)]
pub trait Route<Op: Operation>: Descriptor {
    type Via: Strategy;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Terminal {}
    impl Sealed for super::Inherit {}
}

/// Route tag. Only [`Terminal`] and [`Inherit`] implement it.
pub trait Strategy: sealed::Sealed + 'static {
    /// `true` when the descriptor computes the operation itself.
    const IS_TERMINAL: bool;
}

/// The descriptor supplies the operation's kernel itself.
#[derive(Debug)]
pub struct Terminal;

/// The descriptor forwards the operation to its [`Refinement::Ancestor`].
///
/// [`Refinement::Ancestor`]: crate::Refinement::Ancestor
#[derive(Debug)]
pub struct Inherit;

impl Strategy for Terminal {
    const IS_TERMINAL: bool = true;
}

impl Strategy for Inherit {
    const IS_TERMINAL: bool = false;
}
