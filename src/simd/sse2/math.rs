//! SSE2 natural logarithm on 4 packed single-precision values.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::lanes::{ln_lanes, LaneOps, LANE_COUNT};

/// SSE2 lane backend.
#[derive(Debug, Clone, Copy)]
pub struct Sse2;

impl LaneOps for Sse2 {
    type F = __m128;
    type I = __m128i;

    #[inline(always)]
    unsafe fn load(xs: &[f32; LANE_COUNT]) -> Self::F {
        _mm_loadu_ps(xs.as_ptr())
    }

    #[inline(always)]
    unsafe fn store(v: Self::F) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        _mm_storeu_ps(out.as_mut_ptr(), v);
        out
    }

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self::F {
        _mm_set1_ps(value)
    }

    #[inline(always)]
    unsafe fn splat_i(value: i32) -> Self::I {
        _mm_set1_epi32(value)
    }

    #[inline(always)]
    unsafe fn to_bits(v: Self::F) -> Self::I {
        _mm_castps_si128(v)
    }

    #[inline(always)]
    unsafe fn from_bits(v: Self::I) -> Self::F {
        _mm_castsi128_ps(v)
    }

    #[inline(always)]
    unsafe fn and(a: Self::I, b: Self::I) -> Self::I {
        _mm_and_si128(a, b)
    }

    #[inline(always)]
    unsafe fn or(a: Self::I, b: Self::I) -> Self::I {
        _mm_or_si128(a, b)
    }

    #[inline(always)]
    unsafe fn xor(a: Self::I, b: Self::I) -> Self::I {
        _mm_xor_si128(a, b)
    }

    #[inline(always)]
    unsafe fn shr<const N: i32>(a: Self::I) -> Self::I {
        _mm_srli_epi32::<N>(a)
    }

    #[inline(always)]
    unsafe fn sub_i(a: Self::I, b: Self::I) -> Self::I {
        _mm_sub_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn to_float(a: Self::I) -> Self::F {
        _mm_cvtepi32_ps(a)
    }

    #[inline(always)]
    unsafe fn gt_mask(a: Self::F, b: Self::F) -> Self::I {
        _mm_castps_si128(_mm_cmpgt_ps(a, b))
    }

    #[inline(always)]
    unsafe fn sub(a: Self::F, b: Self::F) -> Self::F {
        _mm_sub_ps(a, b)
    }

    #[inline(always)]
    unsafe fn mul(a: Self::F, b: Self::F) -> Self::F {
        _mm_mul_ps(a, b)
    }

    #[inline(always)]
    unsafe fn mul_add(a: Self::F, b: Self::F, c: Self::F) -> Self::F {
        _mm_add_ps(_mm_mul_ps(a, b), c)
    }
}

/// Computes the natural logarithm of 4 packed single-precision values.
///
/// Negative inputs are treated as their magnitude. Zero, subnormals, NaN and
/// infinities produce finite values with no meaning as a logarithm.
///
/// # Safety
///
/// Requires SSE2.
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn _mm_ln_ps(x: __m128) -> __m128 {
    ln_lanes::<Sse2>(x)
}

/// Array wrapper around [`_mm_ln_ps`].
///
/// # Safety
///
/// Requires SSE2.
#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn ln_f32x4(xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    Sse2::store(_mm_ln_ps(Sse2::load(&xs)))
}
