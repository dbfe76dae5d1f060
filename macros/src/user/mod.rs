//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Descriptor)]` | on struct | Declare a descriptor, its ancestor and routes |

pub mod descriptor;

pub use descriptor::expand_derive_descriptor;
