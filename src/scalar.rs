//! Portable scalar approximation of `ln(x)` for `f32`.
//!
//! The input is split into its binary exponent and a mantissa in `[1, 2)`
//! by reinterpreting the IEEE 754 bit pattern. A cubic fitted to `ln` over
//! the mantissa interval is evaluated with Estrin's scheme and the exponent
//! contribution `m * ln(2)` is added back.
//!
//! # Accuracy
//!
//! Absolute error stays below `2.5e-3` for every positive normal input
//! (the maximum, about `1.95e-3`, sits inside the mantissa interval and
//! repeats at every binade).
//!
//! # Domain
//!
//! Zero, negative values, subnormals, NaN and infinities are not checked.
//! The result for them is whatever the bit arithmetic produces: always a
//! finite value, but meaningless as a logarithm. Use
//! [`approx_log_checked`](crate::approx_log_checked) to reject them.

/// ln(2) as used for the exponent contribution.
pub const LOGF_RANGE: f32 = 0.693_147_2;

/// Cubic coefficients in Estrin order: `[p3, p1, p2, p0]`.
#[allow(clippy::excessive_precision)]
pub const LOGF_LUT: [f32; 4] = [
    0.141_542_545_461_925_70,  // p3
    2.308_881_519_263_610_70,  // p1
    -0.868_194_531_004_899_7,  // p2
    -1.582_229_533_151_528_4,  // p0
];

const EXPONENT_BIAS: i32 = 127;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const ONE_BITS: u32 = 0x3F80_0000; // 127 << 23

/// Splits `x` into `(exponent, mantissa)` with `x = mantissa * 2^exponent`.
///
/// The mantissa is in `[1, 2)` for positive normal inputs.
#[inline(always)]
pub fn decompose(x: f32) -> (i32, f32) {
    let bits = x.to_bits();
    let exponent = ((bits as i32) >> 23) - EXPONENT_BIAS;
    let mantissa = f32::from_bits((bits & MANTISSA_MASK) | ONE_BITS);

    (exponent, mantissa)
}

/// Approximates `ln(x)` with the bit-manipulation cubic.
///
/// Pure and allocation free. See the module docs for the error bound and
/// the behaviour outside the positive normal range.
#[inline(always)]
pub fn logf_reference(x: f32) -> f32 {
    let (m, r) = decompose(x);

    // Estrin: the two partial sums are independent
    let a = LOGF_LUT[0] * r + LOGF_LUT[2];
    let b = LOGF_LUT[1] * r + LOGF_LUT[3];
    let r2 = r * r;

    let mut result = b + a * r2;
    result += (m as f32) * LOGF_RANGE;

    result
}
