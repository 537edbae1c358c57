//! ARM NEON realisation of the lane kernel for 128-bit vectors.
//!
//! NEON (Advanced SIMD) is mandatory on AArch64, which covers Apple Silicon,
//! AWS Graviton and modern Android and iOS devices.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: AArch64
//! - **Build**: compiled only when the build script emits `cfg(neon)`
//! - **Runtime**: confirmed with `is_aarch64_feature_detected!("neon")`
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 128 bits (4 × f32, 4 × i32)
//! - **Multiply-accumulate**: fused `vfmaq_f32`, one rounding per term. Results
//!   can differ from the SSE2 and portable backends in the last bit or two,
//!   always inside the documented error bound

#[allow(clippy::excessive_precision)]
pub mod math;
