//! SSE2 realisation of the lane kernel for 128-bit vectors.
//!
//! SSE2 is part of the x86_64 baseline and of every x86 CPU since the
//! Pentium 4, so this backend covers practically every x86 machine.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: x86 or x86_64
//! - **Build**: compiled only when the build script emits `cfg(sse2)`
//! - **Runtime**: availability is still confirmed with `is_x86_feature_detected!`
//!   before dispatching here
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 128 bits (4 × f32, 4 × i32)
//! - **Multiply-accumulate**: separate multiply and add (SSE2 has no FMA), so
//!   results are bit-identical to the portable backend

#[allow(clippy::excessive_precision)]
pub mod math;
