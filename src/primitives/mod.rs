//! # Layer 0: Primitives
//!
//! - `depth.rs`: Peano numbers bounding the delegation walk.

pub mod depth;

pub use depth::{D0, D1, D2, D3, D4, D8, D16, MaxDelegationDepth, Peano, S, Z};
