//! Single-operand primitives.

crate::unary_op! {
    /// Computes the absolute value.
    pub fn abs(x) as Abs;

    /// Computes the square root.
    pub fn sqrt(x) as Sqrt;

    /// Computes the reciprocal square root `1 / sqrt(x)`.
    pub fn rsqrt(x) as Rsqrt;

    /// Rounds toward negative infinity.
    pub fn floor(x) as Floor;

    /// Rounds toward positive infinity.
    pub fn ceil(x) as Ceil;

    /// Rounds toward zero.
    pub fn trunc(x) as Trunc;

    /// Rounds to the nearest integer, ties away from zero.
    pub fn round(x) as Round;

    /// Computes `e^x`.
    pub fn exp(x) as Exp;

    /// Computes the natural logarithm.
    pub fn log(x) as Log;

    /// Computes the sine (radians).
    pub fn sin(x) as Sin;

    /// Computes the cosine (radians).
    pub fn cos(x) as Cos;

    /// Computes the tangent (radians).
    pub fn tan(x) as Tan;
}
