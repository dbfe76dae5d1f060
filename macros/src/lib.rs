//! Procedural macros for the capmath dispatch system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Descriptor)]` | struct | Declare a descriptor, its ancestor and routes |
//! | `depth_aliases!(n)` | - | Generate delegation depth aliases `D0..Dn` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Descriptor)]
//! #[descriptor(terminal(Sqrt), inherit(Remainder))]
//! struct Accel {
//!     #[ancestor]
//!     host: Host,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate delegation depth aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// depth_aliases!(32);  // Generates D0 = Z, D1 = S<D0>, ..., D32 = S<D31>
/// ```
#[proc_macro]
pub fn depth_aliases(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::depth::DepthInput);
    inner::depth::expand_depth_aliases(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive a math capability descriptor.
///
/// # Attributes
///
/// - `#[descriptor(terminal(Op, ...))]`: the type implements these
///   operations' kernels itself.
/// - `#[descriptor(inherit(Op, ...))]`: forward these operations to the
///   ancestor.
/// - `#[ancestor]` on one field: the embedded ancestor descriptor. Emits
///   `Refinement` with an accessor returning `&self.field`.
///
/// # Usage
/// ```ignore
/// #[derive(Descriptor)]
/// #[descriptor(terminal(Remainder, Sqrt))]
/// struct Host;
///
/// #[derive(Descriptor)]
/// #[descriptor(inherit(Remainder), terminal(Sqrt))]
/// struct Accel(#[ancestor] Host);
/// ```
#[proc_macro_derive(Descriptor, attributes(descriptor, ancestor))]
pub fn derive_descriptor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_descriptor(input).into()
}
