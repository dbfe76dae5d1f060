//! Descriptor and ancestor declarations.

/// Marker for a type describing one backend's math capability set.
///
/// Descriptors are usually zero-sized tags (`struct Host;`) but may carry
/// backend context that their kernels read through `&self`. Derive it with
/// `#[derive(Descriptor)]`, which also emits [`Refinement`] and the
/// per-operation [`Route`](crate::Route) impls.
pub trait Descriptor {}

/// A descriptor layered on top of exactly one ancestor descriptor.
///
/// The ancestor is reached through a composition accessor: the refinement
/// embeds (or newtype-wraps) its ancestor and hands out a reference to it.
/// A type can implement this trait once, so a descriptor never has more
/// than one ancestor.
///
/// An ancestor equal to `Self` never terminates; resolving through it fails
/// on [`DelegationDepthExceeded`](super::resolve::DelegationDepthExceeded).
#[diagnostic::on_unimplemented(
    message = "`{Self}` routes an operation via `Inherit` but declares no ancestor",
    label = "`{Self}` has no ancestor descriptor",
    note = "mark the embedded ancestor field with `#[ancestor]`, or route the operation via `Terminal`"
)]
pub trait Refinement: Descriptor {
    /// The descriptor this one refines.
    type Ancestor: Descriptor;

    /// Upcast to the ancestor.
    fn ancestor(&self) -> &Self::Ancestor;
}
