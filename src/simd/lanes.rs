//! Lane-generic logarithm kernel.
//!
//! The vector algorithm is written once against [`LaneOps`], a small
//! vocabulary of lane operations (compare, shift, bitwise masks,
//! multiply-accumulate). Each backend realises the vocabulary with its own
//! registers: SSE2 and NEON intrinsics, or plain arrays for [`Portable`].
//!
//! # Algorithm
//!
//! 1. Clear the sign bit (absolute value).
//! 2. Exponent lanes: `e = (bits >> 23) - 127`.
//! 3. Mantissa lanes: force the exponent field to the bias, giving `[1, 2)`.
//! 4. Branchless renormalisation to `[√½, √2)`: lanes whose mantissa exceeds
//!    √2 get bit 23 flipped by an XOR mask (halving the mantissa) and their
//!    exponent bumped by subtracting the all-ones compare mask.
//! 5. With `t = m - 1`, `ln(1 + t) = t·Q(t)` where `Q` has degree 7. The
//!    coefficient pairs are combined with `t²` and `t⁴` (Estrin).
//! 6. `e·ln2_hi + (t·Q(t) + e·ln2_lo)`.
//!
//! Relative error against a correctly rounded logarithm is below `1e-6`
//! across the positive normal range.

use std::f32::consts::SQRT_2;

/// Number of f32 lanes processed per kernel call.
pub const LANE_COUNT: usize = 4;

const ABS_MASK: i32 = 0x7FFF_FFFF;
const MANTISSA_MASK: i32 = 0x007F_FFFF;
const ONE_BITS: i32 = 0x3F80_0000;
const EXPONENT_LSB: i32 = 0x0080_0000;
const EXPONENT_BIAS: i32 = 127;

// ln(2) split so that e * LN2_HI is exact for every f32 exponent
const LN2_HI: f32 = 0.693_359_375;
const LN2_LO: f32 = -2.121_944_4e-4;

/// `ln(1 + t) / t` on `[√½ - 1, √2 - 1]`, stored as `(c[2k], c[2k+1])` pairs.
/// Fitted by iteratively reweighted least squares, max relative error ~1.7e-7.
#[allow(clippy::excessive_precision)]
pub const LN_POLY: [[f32; 2]; 4] = [
    [0.999_999_94, -0.500_003_46],
    [0.333_356_02, -0.249_715_37],
    [0.198_844_11, -0.172_129_05],
    [0.163_368_75, -0.103_755_38],
];

/// Lane operations needed by [`ln_lanes`].
///
/// `F` holds float lanes, `I` holds the same bits viewed as `i32` lanes.
///
/// # Safety
///
/// Implementations may use target specific intrinsics. Callers must make
/// sure the instruction set of the implementation is available.
pub trait LaneOps {
    type F: Copy;
    type I: Copy;

    unsafe fn load(xs: &[f32; LANE_COUNT]) -> Self::F;

    unsafe fn store(v: Self::F) -> [f32; LANE_COUNT];

    unsafe fn splat(value: f32) -> Self::F;

    unsafe fn splat_i(value: i32) -> Self::I;

    /// Reinterprets float lanes as integer lanes, bit for bit.
    unsafe fn to_bits(v: Self::F) -> Self::I;

    /// Reinterprets integer lanes as float lanes, bit for bit.
    unsafe fn from_bits(v: Self::I) -> Self::F;

    unsafe fn and(a: Self::I, b: Self::I) -> Self::I;

    unsafe fn or(a: Self::I, b: Self::I) -> Self::I;

    unsafe fn xor(a: Self::I, b: Self::I) -> Self::I;

    /// Logical shift right of every lane.
    unsafe fn shr<const N: i32>(a: Self::I) -> Self::I;

    /// Wrapping lane subtraction.
    unsafe fn sub_i(a: Self::I, b: Self::I) -> Self::I;

    /// Numeric conversion `i32 -> f32`.
    unsafe fn to_float(a: Self::I) -> Self::F;

    /// All ones where `a > b`, zero elsewhere.
    unsafe fn gt_mask(a: Self::F, b: Self::F) -> Self::I;

    unsafe fn sub(a: Self::F, b: Self::F) -> Self::F;

    unsafe fn mul(a: Self::F, b: Self::F) -> Self::F;

    /// `a * b + c`, fused or not depending on the backend.
    unsafe fn mul_add(a: Self::F, b: Self::F, c: Self::F) -> Self::F;
}

/// Computes `ln(|x|)` lane by lane.
///
/// # Safety
///
/// Same requirements as the `L` implementation.
#[inline(always)]
pub unsafe fn ln_lanes<L: LaneOps>(x: L::F) -> L::F {
    let bits = L::and(L::to_bits(x), L::splat_i(ABS_MASK));

    // --- 1. Exponent / mantissa split ---
    let mut exponent = L::sub_i(L::shr::<23>(bits), L::splat_i(EXPONENT_BIAS));
    let mut mantissa_bits = L::or(L::and(bits, L::splat_i(MANTISSA_MASK)), L::splat_i(ONE_BITS));

    // --- 2. Branchless fold into [sqrt(1/2), sqrt(2)) ---
    let above = L::gt_mask(L::from_bits(mantissa_bits), L::splat(SQRT_2));
    mantissa_bits = L::xor(mantissa_bits, L::and(above, L::splat_i(EXPONENT_LSB)));
    // mask lanes are -1
    exponent = L::sub_i(exponent, above);

    let t = L::sub(L::from_bits(mantissa_bits), L::splat(1.0));

    // --- 3. Estrin evaluation of Q(t) ---
    let t2 = L::mul(t, t);
    let t4 = L::mul(t2, t2);

    let p01 = L::mul_add(L::splat(LN_POLY[0][1]), t, L::splat(LN_POLY[0][0]));
    let p23 = L::mul_add(L::splat(LN_POLY[1][1]), t, L::splat(LN_POLY[1][0]));
    let p45 = L::mul_add(L::splat(LN_POLY[2][1]), t, L::splat(LN_POLY[2][0]));
    let p67 = L::mul_add(L::splat(LN_POLY[3][1]), t, L::splat(LN_POLY[3][0]));

    let low = L::mul_add(p23, t2, p01);
    let high = L::mul_add(p67, t2, p45);
    let q = L::mul_add(high, t4, low);

    // --- 4. Add the exponent back ---
    let e = L::to_float(exponent);
    let r = L::mul_add(t, q, L::mul(e, L::splat(LN2_LO)));

    L::mul_add(e, L::splat(LN2_HI), r)
}

/// Array realisation of [`LaneOps`], left to the compiler to vectorise.
#[derive(Debug, Clone, Copy)]
pub struct Portable;

impl LaneOps for Portable {
    type F = [f32; LANE_COUNT];
    type I = [i32; LANE_COUNT];

    #[inline(always)]
    unsafe fn load(xs: &[f32; LANE_COUNT]) -> Self::F {
        *xs
    }

    #[inline(always)]
    unsafe fn store(v: Self::F) -> [f32; LANE_COUNT] {
        v
    }

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self::F {
        [value; LANE_COUNT]
    }

    #[inline(always)]
    unsafe fn splat_i(value: i32) -> Self::I {
        [value; LANE_COUNT]
    }

    #[inline(always)]
    unsafe fn to_bits(v: Self::F) -> Self::I {
        v.map(|x| x.to_bits() as i32)
    }

    #[inline(always)]
    unsafe fn from_bits(v: Self::I) -> Self::F {
        v.map(|x| f32::from_bits(x as u32))
    }

    #[inline(always)]
    unsafe fn and(a: Self::I, b: Self::I) -> Self::I {
        std::array::from_fn(|i| a[i] & b[i])
    }

    #[inline(always)]
    unsafe fn or(a: Self::I, b: Self::I) -> Self::I {
        std::array::from_fn(|i| a[i] | b[i])
    }

    #[inline(always)]
    unsafe fn xor(a: Self::I, b: Self::I) -> Self::I {
        std::array::from_fn(|i| a[i] ^ b[i])
    }

    #[inline(always)]
    unsafe fn shr<const N: i32>(a: Self::I) -> Self::I {
        a.map(|x| ((x as u32) >> N) as i32)
    }

    #[inline(always)]
    unsafe fn sub_i(a: Self::I, b: Self::I) -> Self::I {
        std::array::from_fn(|i| a[i].wrapping_sub(b[i]))
    }

    #[inline(always)]
    unsafe fn to_float(a: Self::I) -> Self::F {
        a.map(|x| x as f32)
    }

    #[inline(always)]
    unsafe fn gt_mask(a: Self::F, b: Self::F) -> Self::I {
        std::array::from_fn(|i| if a[i] > b[i] { -1 } else { 0 })
    }

    #[inline(always)]
    unsafe fn sub(a: Self::F, b: Self::F) -> Self::F {
        std::array::from_fn(|i| a[i] - b[i])
    }

    #[inline(always)]
    unsafe fn mul(a: Self::F, b: Self::F) -> Self::F {
        std::array::from_fn(|i| a[i] * b[i])
    }

    #[inline(always)]
    unsafe fn mul_add(a: Self::F, b: Self::F, c: Self::F) -> Self::F {
        std::array::from_fn(|i| a[i] * b[i] + c[i])
    }
}

/// Runs the lane kernel on 4 values with the [`Portable`] backend.
#[inline(always)]
pub fn ln_portable(xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    // SAFETY: the portable backend only uses safe array arithmetic.
    unsafe { Portable::store(ln_lanes::<Portable>(Portable::load(&xs))) }
}
