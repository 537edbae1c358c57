//! Fast approximate natural logarithm for `f32`.
//!
//! Two independent implementations of one contract:
//!
//! - [`approx_log`]: portable scalar approximation. The IEEE 754 bit pattern
//!   is split into exponent and mantissa and a cubic is evaluated over the
//!   mantissa with Estrin's scheme. Absolute error below `2.5e-3`.
//! - [`approx_log_vector`]: the same decomposition on 4 SIMD lanes with a
//!   log-specific range reduction and a degree 8 polynomial. Relative error
//!   below `1e-6`. The backend (SSE2, NEON) is chosen once at runtime; when
//!   no hardware backend is available every lane is computed by
//!   [`approx_log`] instead.
//!
//! All functions are pure, allocation free (apart from the slice operations
//! returning a `Vec`) and safe to call from any number of threads.
//!
//! # Domain
//!
//! Results are bounded only for positive normal inputs. Zero, negative
//! values, subnormals, NaN and infinities are not special-cased and yield an
//! unspecified finite value. [`approx_log_checked`] rejects them instead.
//!
//! # Usage
//!
//! ```rust
//! use fastlog::{approx_log, approx_log_vector, SimdLn};
//!
//! assert!((approx_log(8.0) - 2.0794).abs() < 2.5e-3);
//!
//! let lanes = approx_log_vector([1.0, 2.0, 4.0, 0.5]);
//! assert!((lanes[1] - std::f32::consts::LN_2).abs() < 1e-6);
//!
//! let data = vec![1.0f32, 10.0, 100.0];
//! let logs = data.as_slice().simd_ln();
//! assert_eq!(logs.len(), 3);
//! ```

pub mod error;
pub mod scalar;
pub mod simd;

pub use error::{FastLogError, Result};
pub use simd::slice::ln_into;
pub use simd::{Backend, SimdLn, LANE_COUNT};

/// Inputs above this length use the parallel path in
/// [`SimdLn::par_simd_ln`] and [`ln_into`].
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Number of elements each rayon task processes.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

/// Approximates `ln(x)` with the scalar bit-manipulation cubic.
///
/// Absolute error is below `2.5e-3` for positive normal `x`. Other inputs
/// give an unspecified finite value.
#[inline(always)]
pub fn approx_log(x: f32) -> f32 {
    scalar::logf_reference(x)
}

/// Approximates `ln(x)` for [`LANE_COUNT`] values at once on the detected backend.
///
/// Relative error is below `1e-6` for positive normal inputs when a hardware
/// backend runs. Without one, each lane is exactly [`approx_log`] of its input.
#[inline(always)]
pub fn approx_log_vector(xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    simd::dispatch::ln_block(Backend::detect(), xs)
}

/// Same as [`approx_log_vector`] on an explicit backend.
///
/// An unavailable backend is replaced by [`Backend::Fallback`].
#[inline(always)]
pub fn approx_log_vector_with(backend: Backend, xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    simd::dispatch::ln_block(backend, xs)
}

/// Single-value entry to the vector path: broadcasts `x` to every lane and
/// returns lane 0.
#[inline(always)]
pub fn approx_log_lane(x: f32) -> f32 {
    approx_log_vector([x; LANE_COUNT])[0]
}

/// [`approx_log`] restricted to the inputs it is accurate for.
///
/// # Errors
///
/// Returns [`FastLogError::DomainError`] unless `x` is positive, finite and
/// normal.
pub fn approx_log_checked(x: f32) -> Result<f32> {
    if x.is_sign_negative() || !x.is_normal() {
        return Err(error::domain_error(
            x,
            "input must be a positive, finite, normal float",
        ));
    }

    Ok(approx_log(x))
}
