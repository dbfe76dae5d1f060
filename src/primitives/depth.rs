//! Peano numbers bounding the delegation walk.
//!
//! Every delegation hop consumes one `S<_>` layer. At depth `Z` the resolver's
//! `Inherit` impl requires `DelegationDepthExceeded`, which has no impls, so
//! an ancestor chain that never reaches a terminal (including a descriptor
//! that names itself as its ancestor) fails on that bound with an E0277.

use core::marker::PhantomData;

/// Type-level natural number.
pub trait Peano: 'static {
    /// The runtime value of this number.
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug)]
pub struct Z;

impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// D0 = Z, D1 = S<D0>, ..., D32 = S<D31>
macros::depth_aliases!(32);

/// Maximum number of delegation hops a resolution may take.
pub type MaxDelegationDepth = D16;
