//! # Capability dispatch
//!
//! ```text
//! dispatch/
//! ├── descriptor.rs - Descriptor, Refinement (single ancestor + upcast)
//! ├── route.rs      - Operation, Invoke, Route, Terminal/Inherit tags
//! └── resolve.rs    - Resolve (depth-bounded walk), dispatch, introspection
//! ```

pub mod descriptor;
pub mod resolve;
pub mod route;

pub use descriptor::{Descriptor, Refinement};
pub use resolve::{DelegationDepthExceeded, Resolve, Resolved, dispatch, hops, resolver_name};
pub use route::{Inherit, Invoke, Operation, Route, Strategy, Terminal};
