//! Two-operand primitives.

crate::binary_op! {
    /// Computes the IEEE remainder of the floating point division `x / y`.
    ///
    /// The quotient is rounded to the nearest integer (ties to even), so the
    /// result lies in `[-|y| / 2, |y| / 2]`: `remainder(d, 5.5, 2.0) == -0.5`.
    pub fn remainder(x, y) as Remainder;

    /// Computes the floating point remainder of `x / y` with the quotient
    /// truncated toward zero. The result has the sign of `x`.
    pub fn fmod(x, y) as Fmod;

    /// Computes `x` raised to the power `y`.
    pub fn pow(base, exp) as Pow;

    /// Computes the arc tangent of `y / x` using the signs of both arguments
    /// to determine the quadrant.
    pub fn atan2(y, x) as Atan2;

    /// Returns the smaller of `x` and `y`.
    pub fn min(x, y) as Min;

    /// Returns the larger of `x` and `y`.
    pub fn max(x, y) as Max;
}
