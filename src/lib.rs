#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - host: default, bundles the libm-backed Host backend

//! # capmath
//!
//! Compile-time capability dispatch for math primitives.
//!
//! **The same numeric code, routed to any backend at compile time.**
//!
//! ## Architecture
//!
//! A *descriptor* is a type standing for "the math capabilities of backend
//! X". Calling an operation such as [`remainder`](ops::remainder) with a
//! descriptor resolves, purely through trait selection, which implementation
//! runs: the descriptor's own kernel, or its ancestor's.
//!
//! ### 1. Routes
//! Each descriptor declares one route per operation: [`Terminal`] (it
//! implements the kernel) or [`Inherit`] (forward to its single declared
//! ancestor). One route per pair means selection is never ambiguous.
//!
//! ### 2. Delegation
//! [`Inherit`] upcasts through [`Refinement::ancestor`] and resolves again,
//! with the operands untouched, until a terminal is reached.
//!
//! ### 3. Depth bound
//! Each hop consumes one Peano level of [`MaxDelegationDepth`]. Cycles and
//! self-delegation exhaust it and fail the build with a diagnostic.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Peano depth (Z, S, D0..D32, MaxDelegationDepth)                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Dispatch Core                                           |
//! |  - Descriptor, Refinement, Route, Terminal/Inherit, Resolve       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Math Surface                                            |
//! |  - binary_op!/unary_op!, ops::{remainder, sqrt, ...}              |
//! |  - #[derive(Descriptor)], backend::Host                           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Zero Runtime Overhead**: no branches, no vtables; every call inlines
//!   down to the terminal kernel
//! - **Open Extension**: backends in other crates add descriptors and
//!   kernels without touching this crate
//! - **Compile-time Errors**: missing coverage, cycles and self-delegation
//!   are build failures naming the operation and descriptor
//!
//! ## Quick Start
//!
//! ```
//! use capmath::prelude::*;
//!
//! #[derive(Descriptor)]
//! #[descriptor(terminal(Remainder))]
//! struct Cpu;
//!
//! impl RemainderKernel<f64, f64> for Cpu {
//!     type Output = f64;
//!     fn remainder(&self, x: f64, y: f64) -> f64 {
//!         x - (x / y).round_ties_even() * y
//!     }
//! }
//!
//! // An accelerator without its own remainder: borrow the CPU's.
//! #[derive(Descriptor)]
//! #[descriptor(inherit(Remainder))]
//! struct Accelerator {
//!     #[ancestor]
//!     cpu: Cpu,
//! }
//!
//! let acc = Accelerator { cpu: Cpu };
//! assert_eq!(remainder(&acc, 5.5_f64, 2.0_f64), -0.5);
//! assert_eq!(remainder(&acc, 5.5_f64, 2.0_f64), remainder(&Cpu, 5.5_f64, 2.0_f64));
//! ```

// Allow `::capmath` to work inside the crate itself
extern crate self as capmath;

// Re-export paste for binary_op! / unary_op!
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Dispatch Core
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 2: Math Surface
// =============================================================================

// Operation definition macros (binary_op!, unary_op!)
pub mod op_macros;

pub mod ops;

pub mod backend;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use dispatch::{
    DelegationDepthExceeded, Descriptor, Inherit, Invoke, Operation, Refinement, Resolve,
    Resolved, Route, Strategy, Terminal, dispatch, hops, resolver_name,
};
pub use primitives::depth::{MaxDelegationDepth, Peano, S, Z};

// Re-export proc-macros
pub use macros::Descriptor;

/// Common items for backends and callers.
pub mod prelude {
    pub use crate::dispatch::{Descriptor, Inherit, Refinement, Route, Terminal};
    pub use crate::ops::*;
    pub use macros::Descriptor;

    #[cfg(feature = "host")]
    pub use crate::backend::Host;
}
