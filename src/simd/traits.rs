/// Element-wise natural logarithm over a collection of `f32`.
///
/// | Method | Kernel | Accuracy |
/// |--------|--------|----------|
/// | `simd_ln` | 4-lane kernel on the detected backend | ~1e-6 relative |
/// | `par_simd_ln` | same kernel, split across the rayon pool | ~1e-6 relative |
/// | `approx_ln` | scalar bit-manipulation cubic | 2.5e-3 absolute |
/// | `scalar_ln` | `f32::ln` from the standard library | about 1 ULP |
pub trait SimdLn {
    type Output;

    fn simd_ln(self) -> Self::Output;
    fn par_simd_ln(self) -> Self::Output;
    fn approx_ln(self) -> Self::Output;
    fn scalar_ln(self) -> Self::Output;
}
