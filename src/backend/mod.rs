//! Bundled backends.
//!
//! Backends normally live in their own crates and only depend on the
//! public dispatch surface. [`Host`] ships here as the reference root
//! descriptor that refinements delegate to.

#[cfg(feature = "host")]
mod host;

#[cfg(feature = "host")]
pub use host::Host;
