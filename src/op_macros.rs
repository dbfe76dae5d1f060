//! Operation definition macros.
//!
//! Every math primitive gets the same scaffolding: a marker type, a kernel
//! trait for backends, the [`Invoke`](crate::Invoke) bridge, and the
//! entry-point function. The library's own surface in [`ops`](crate::ops) is
//! built with these macros, and downstream crates can use them to add
//! operations that resolve through the same machinery.

// =============================================================================
// binary_op! - f(x, y)
// =============================================================================

/// Define binary operations.
///
/// ```ignore
/// binary_op! {
///     /// Computes the IEEE remainder of `x / y`.
///     pub fn remainder(x, y) as Remainder;
/// }
/// ```
///
/// expands to:
///
/// - `pub struct Remainder;` the operation marker,
/// - `pub trait RemainderKernel<Tx, Ty>` with `fn remainder(&self, x, y)`,
///   implemented by backend descriptors,
/// - `pub fn remainder(descriptor, x, y)` the entry point.
#[macro_export]
macro_rules! binary_op {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($x:ident, $y:ident) as $Op:ident;
    )*) => {$(
        #[doc = concat!("Operation marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $Op;

        impl $crate::Operation for $Op {
            const NAME: &'static str = stringify!($name);
        }

        $crate::paste::paste! {
            /// Terminal kernel, implemented by descriptors routing this operation via `Terminal`.
            $vis trait [<$Op Kernel>]<Tx, Ty> {
                type Output;

                fn $name(&self, $x: Tx, $y: Ty) -> Self::Output;
            }

            impl<T, Tx, Ty> $crate::Invoke<T, (Tx, Ty)> for $Op
            where
                T: [<$Op Kernel>]<Tx, Ty>,
            {
                type Output = <T as [<$Op Kernel>]<Tx, Ty>>::Output;

                #[inline(always)]
                fn invoke(descriptor: &T, ($x, $y): (Tx, Ty)) -> Self::Output {
                    <T as [<$Op Kernel>]<Tx, Ty>>::$name(descriptor, $x, $y)
                }
            }
        }

        $(#[$meta])*
        #[inline(always)]
        $vis fn $name<T, Tx, Ty>(
            descriptor: &T,
            $x: Tx,
            $y: Ty,
        ) -> $crate::Resolved<$Op, T, (Tx, Ty)>
        where
            T: $crate::Route<$Op>,
            <T as $crate::Route<$Op>>::Via:
                $crate::Resolve<$Op, T, (Tx, Ty), $crate::MaxDelegationDepth>,
        {
            $crate::dispatch::<$Op, T, (Tx, Ty)>(descriptor, ($x, $y))
        }
    )*};
}

// =============================================================================
// unary_op! - f(x)
// =============================================================================

/// Define unary operations.
///
/// Same shape as [`binary_op!`] with a single operand. The operand tuple
/// seen by the resolver is `(Tx,)`.
#[macro_export]
macro_rules! unary_op {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($x:ident) as $Op:ident;
    )*) => {$(
        #[doc = concat!("Operation marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $Op;

        impl $crate::Operation for $Op {
            const NAME: &'static str = stringify!($name);
        }

        $crate::paste::paste! {
            /// Terminal kernel, implemented by descriptors routing this operation via `Terminal`.
            $vis trait [<$Op Kernel>]<Tx> {
                type Output;

                fn $name(&self, $x: Tx) -> Self::Output;
            }

            impl<T, Tx> $crate::Invoke<T, (Tx,)> for $Op
            where
                T: [<$Op Kernel>]<Tx>,
            {
                type Output = <T as [<$Op Kernel>]<Tx>>::Output;

                #[inline(always)]
                fn invoke(descriptor: &T, ($x,): (Tx,)) -> Self::Output {
                    <T as [<$Op Kernel>]<Tx>>::$name(descriptor, $x)
                }
            }
        }

        $(#[$meta])*
        #[inline(always)]
        $vis fn $name<T, Tx>(descriptor: &T, $x: Tx) -> $crate::Resolved<$Op, T, (Tx,)>
        where
            T: $crate::Route<$Op>,
            <T as $crate::Route<$Op>>::Via:
                $crate::Resolve<$Op, T, (Tx,), $crate::MaxDelegationDepth>,
        {
            $crate::dispatch::<$Op, T, (Tx,)>(descriptor, ($x,))
        }
    )*};
}
