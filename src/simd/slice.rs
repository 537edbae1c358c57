//! Slice and array operations built on the 4-lane logarithm kernel.
//!
//! Full blocks of [`LANE_COUNT`] elements go straight through the kernel.
//! A trailing partial block is padded with `1.0` (whose logarithm is exactly
//! zero on every backend) and only the valid lanes are written back.
//!
//! Large inputs are split across the rayon thread pool in blocks of
//! [`PARALLEL_CHUNK_SIZE`] elements. Below [`PARALLEL_SIMD_THRESHOLD`] the
//! threading overhead outweighs the benefit and the serial path is used.

use ndarray::{Array1, ArrayBase, Data, Ix1};
use rayon::prelude::*;

use crate::{
    error::{validation_error, Result},
    scalar::logf_reference,
    simd::{
        dispatch::{ln_resolved_block, Backend},
        lanes::LANE_COUNT,
        traits::SimdLn,
    },
    PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD,
};

#[inline(always)]
fn simd_ln_block(backend: Backend, a: &[f32], c: &mut [f32]) {
    // Assumes lengths are LANE_COUNT
    let mut xs = [0.0f32; LANE_COUNT];
    xs.copy_from_slice(a);
    c.copy_from_slice(&ln_resolved_block(backend, xs));
}

#[inline(always)]
fn simd_ln_partial_block(backend: Backend, a: &[f32], c: &mut [f32]) {
    let size = a.len();
    let mut xs = [1.0f32; LANE_COUNT];
    xs[..size].copy_from_slice(a);
    c.copy_from_slice(&ln_resolved_block(backend, xs)[..size]);
}

/// Serial kernel over matching input and output slices.
fn simd_ln_into(backend: Backend, a: &[f32], c: &mut [f32]) {
    debug_assert_eq!(a.len(), c.len(), "Slices must be the same length");
    let backend = backend.resolve();

    let mut a_blocks = a.chunks_exact(LANE_COUNT);
    let mut c_blocks = c.chunks_exact_mut(LANE_COUNT);

    for (a_block, c_block) in (&mut a_blocks).zip(&mut c_blocks) {
        simd_ln_block(backend, a_block, c_block);
    }

    let a_rem = a_blocks.remainder();
    if !a_rem.is_empty() {
        simd_ln_partial_block(backend, a_rem, c_blocks.into_remainder());
    }
}

fn parallel_simd_ln_into(backend: Backend, a: &[f32], c: &mut [f32]) {
    let backend = backend.resolve();
    let step = LANE_COUNT;

    // Keep every chunk a multiple of the lane count so only the last one is partial
    let chunk_size = ((PARALLEL_CHUNK_SIZE / step) * step).max(step);

    c.par_chunks_mut(chunk_size)
        .zip(a.par_chunks(chunk_size))
        .for_each(|(c_chunk, a_chunk)| simd_ln_into(backend, a_chunk, c_chunk));
}

#[inline(always)]
fn simd_ln(a: &[f32]) -> Vec<f32> {
    let mut c = vec![0.0f32; a.len()];
    simd_ln_into(Backend::detect(), a, &mut c);
    c
}

#[inline(always)]
fn parallel_simd_ln(a: &[f32]) -> Vec<f32> {
    // For small arrays, fall back to regular SIMD to avoid threading overhead
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        return simd_ln(a);
    }

    let mut c = vec![0.0f32; a.len()];
    parallel_simd_ln_into(Backend::detect(), a, &mut c);
    c
}

#[inline(always)]
fn approx_ln(a: &[f32]) -> Vec<f32> {
    a.iter().map(|&x| logf_reference(x)).collect()
}

#[inline(always)]
fn scalar_ln(a: &[f32]) -> Vec<f32> {
    a.iter().map(|x| x.ln()).collect()
}

/// Writes the vector-path logarithm of `input` into `output`.
///
/// Uses the parallel path for inputs above [`PARALLEL_SIMD_THRESHOLD`].
///
/// # Errors
///
/// Returns [`FastLogError::ValidationError`](crate::FastLogError::ValidationError)
/// if the slices have different lengths. `output` is left untouched in that case.
pub fn ln_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    if input.len() != output.len() {
        return Err(validation_error(format!(
            "output length {} does not match input length {}",
            output.len(),
            input.len()
        )));
    }

    let backend = Backend::detect();
    if input.len() <= PARALLEL_SIMD_THRESHOLD {
        simd_ln_into(backend, input, output);
    } else {
        parallel_simd_ln_into(backend, input, output);
    }

    Ok(())
}

impl SimdLn for &[f32] {
    type Output = Vec<f32>;

    /// Vector-path logarithm of every element on the detected backend.
    #[inline(always)]
    fn simd_ln(self) -> Self::Output {
        simd_ln(self)
    }

    /// Same as [`simd_ln`](SimdLn::simd_ln), split across the rayon pool
    /// for inputs above [`PARALLEL_SIMD_THRESHOLD`].
    #[inline(always)]
    fn par_simd_ln(self) -> Self::Output {
        parallel_simd_ln(self)
    }

    /// Scalar cubic approximation of every element.
    #[inline(always)]
    fn approx_ln(self) -> Self::Output {
        approx_ln(self)
    }

    /// Standard library logarithm of every element.
    #[inline(always)]
    fn scalar_ln(self) -> Self::Output {
        scalar_ln(self)
    }
}

impl SimdLn for &Vec<f32> {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_ln(self) -> Self::Output {
        self.as_slice().simd_ln()
    }

    #[inline(always)]
    fn par_simd_ln(self) -> Self::Output {
        self.as_slice().par_simd_ln()
    }

    #[inline(always)]
    fn approx_ln(self) -> Self::Output {
        self.as_slice().approx_ln()
    }

    #[inline(always)]
    fn scalar_ln(self) -> Self::Output {
        self.as_slice().scalar_ln()
    }
}

impl SimdLn for Vec<f32> {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_ln(self) -> Self::Output {
        self.as_slice().simd_ln()
    }

    #[inline(always)]
    fn par_simd_ln(self) -> Self::Output {
        self.as_slice().par_simd_ln()
    }

    #[inline(always)]
    fn approx_ln(self) -> Self::Output {
        self.as_slice().approx_ln()
    }

    #[inline(always)]
    fn scalar_ln(self) -> Self::Output {
        self.as_slice().scalar_ln()
    }
}

/// Runs `f` on the elements of `a` in logical order.
///
/// Standard-layout arrays are borrowed directly; strided views are gathered
/// into a temporary buffer first.
fn map_array<S, F>(a: &ArrayBase<S, Ix1>, f: F) -> Array1<f32>
where
    S: Data<Elem = f32>,
    F: FnOnce(&[f32]) -> Vec<f32>,
{
    match a.as_slice() {
        Some(slice) => Array1::from_vec(f(slice)),
        None => {
            let gathered: Vec<f32> = a.iter().copied().collect();
            Array1::from_vec(f(&gathered))
        }
    }
}

impl<S> SimdLn for &ArrayBase<S, Ix1>
where
    S: Data<Elem = f32>,
{
    type Output = Array1<f32>;

    #[inline(always)]
    fn simd_ln(self) -> Self::Output {
        map_array(self, simd_ln)
    }

    #[inline(always)]
    fn par_simd_ln(self) -> Self::Output {
        map_array(self, parallel_simd_ln)
    }

    #[inline(always)]
    fn approx_ln(self) -> Self::Output {
        map_array(self, approx_ln)
    }

    #[inline(always)]
    fn scalar_ln(self) -> Self::Output {
        map_array(self, scalar_ln)
    }
}
