//! # Math surface
//!
//! One entry point per primitive, each generated by the same macro so every
//! operation resolves through [`Route`](crate::Route) and
//! [`Resolve`](crate::Resolve) identically.
//!
//! | Binary | Unary |
//! |--------|-------|
//! | [`remainder`], [`fmod`], [`pow`] | [`abs`], [`sqrt`], [`rsqrt`] |
//! | [`atan2`], [`min`], [`max`] | [`floor`], [`ceil`], [`trunc`], [`round`] |
//! | | [`exp`], [`log`], [`sin`], [`cos`], [`tan`] |

mod binary;
mod unary;

pub use binary::*;
pub use unary::*;
