//! NEON natural logarithm on 4 packed single-precision values.

use std::arch::aarch64::*;

use crate::simd::lanes::{ln_lanes, LaneOps, LANE_COUNT};

/// NEON lane backend.
#[derive(Debug, Clone, Copy)]
pub struct Neon;

impl LaneOps for Neon {
    type F = float32x4_t;
    type I = int32x4_t;

    #[inline(always)]
    unsafe fn load(xs: &[f32; LANE_COUNT]) -> Self::F {
        vld1q_f32(xs.as_ptr())
    }

    #[inline(always)]
    unsafe fn store(v: Self::F) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        vst1q_f32(out.as_mut_ptr(), v);
        out
    }

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self::F {
        vdupq_n_f32(value)
    }

    #[inline(always)]
    unsafe fn splat_i(value: i32) -> Self::I {
        vdupq_n_s32(value)
    }

    #[inline(always)]
    unsafe fn to_bits(v: Self::F) -> Self::I {
        vreinterpretq_s32_f32(v)
    }

    #[inline(always)]
    unsafe fn from_bits(v: Self::I) -> Self::F {
        vreinterpretq_f32_s32(v)
    }

    #[inline(always)]
    unsafe fn and(a: Self::I, b: Self::I) -> Self::I {
        vandq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn or(a: Self::I, b: Self::I) -> Self::I {
        vorrq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn xor(a: Self::I, b: Self::I) -> Self::I {
        veorq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn shr<const N: i32>(a: Self::I) -> Self::I {
        vreinterpretq_s32_u32(vshrq_n_u32::<N>(vreinterpretq_u32_s32(a)))
    }

    #[inline(always)]
    unsafe fn sub_i(a: Self::I, b: Self::I) -> Self::I {
        vsubq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn to_float(a: Self::I) -> Self::F {
        vcvtq_f32_s32(a)
    }

    #[inline(always)]
    unsafe fn gt_mask(a: Self::F, b: Self::F) -> Self::I {
        vreinterpretq_s32_u32(vcgtq_f32(a, b))
    }

    #[inline(always)]
    unsafe fn sub(a: Self::F, b: Self::F) -> Self::F {
        vsubq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn mul(a: Self::F, b: Self::F) -> Self::F {
        vmulq_f32(a, b)
    }

    #[inline(always)]
    unsafe fn mul_add(a: Self::F, b: Self::F, c: Self::F) -> Self::F {
        vfmaq_f32(c, a, b)
    }
}

/// Computes the natural logarithm of 4 packed single-precision values.
///
/// Negative inputs are treated as their magnitude. Zero, subnormals, NaN and
/// infinities produce finite values with no meaning as a logarithm.
///
/// # Safety
///
/// Requires NEON.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn vlnq_f32(x: float32x4_t) -> float32x4_t {
    ln_lanes::<Neon>(x)
}

/// Array wrapper around [`vlnq_f32`].
///
/// # Safety
///
/// Requires NEON.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn ln_f32x4(xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    Neon::store(vlnq_f32(Neon::load(&xs)))
}
