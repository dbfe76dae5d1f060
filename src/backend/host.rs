//! Host CPU backend.
//!
//! Every kernel forwards to `libm`, which keeps the backend usable without
//! `std` and gives C semantics for the IEEE operations.

use crate::ops::*;

/// Math capabilities of the host CPU.
///
/// A root descriptor: it computes every operation itself for `f32` and
/// `f64` operands and has no ancestor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, crate::Descriptor)]
#[descriptor(terminal(
    Remainder, Fmod, Pow, Atan2, Min, Max,
    Abs, Sqrt, Rsqrt, Floor, Ceil, Trunc, Round, Exp, Log, Sin, Cos, Tan,
))]
pub struct Host;

macro_rules! host_binary {
    ($($Kernel:ident::$method:ident => $f64:path, $f32:path;)*) => {$(
        impl $Kernel<f64, f64> for Host {
            type Output = f64;

            #[inline]
            fn $method(&self, x: f64, y: f64) -> f64 {
                $f64(x, y)
            }
        }

        impl $Kernel<f32, f32> for Host {
            type Output = f32;

            #[inline]
            fn $method(&self, x: f32, y: f32) -> f32 {
                $f32(x, y)
            }
        }
    )*};
}

macro_rules! host_unary {
    ($($Kernel:ident::$method:ident => $f64:path, $f32:path;)*) => {$(
        impl $Kernel<f64> for Host {
            type Output = f64;

            #[inline]
            fn $method(&self, x: f64) -> f64 {
                $f64(x)
            }
        }

        impl $Kernel<f32> for Host {
            type Output = f32;

            #[inline]
            fn $method(&self, x: f32) -> f32 {
                $f32(x)
            }
        }
    )*};
}

host_binary! {
    RemainderKernel::remainder => libm::remainder, libm::remainderf;
    FmodKernel::fmod => libm::fmod, libm::fmodf;
    PowKernel::pow => libm::pow, libm::powf;
    Atan2Kernel::atan2 => libm::atan2, libm::atan2f;
    MinKernel::min => libm::fmin, libm::fminf;
    MaxKernel::max => libm::fmax, libm::fmaxf;
}

host_unary! {
    AbsKernel::abs => libm::fabs, libm::fabsf;
    SqrtKernel::sqrt => libm::sqrt, libm::sqrtf;
    RsqrtKernel::rsqrt => rsqrt_f64, rsqrt_f32;
    FloorKernel::floor => libm::floor, libm::floorf;
    CeilKernel::ceil => libm::ceil, libm::ceilf;
    TruncKernel::trunc => libm::trunc, libm::truncf;
    RoundKernel::round => libm::round, libm::roundf;
    ExpKernel::exp => libm::exp, libm::expf;
    LogKernel::log => libm::log, libm::logf;
    SinKernel::sin => libm::sin, libm::sinf;
    CosKernel::cos => libm::cos, libm::cosf;
    TanKernel::tan => libm::tan, libm::tanf;
}

#[inline]
fn rsqrt_f64(x: f64) -> f64 {
    1.0 / libm::sqrt(x)
}

#[inline]
fn rsqrt_f32(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}
