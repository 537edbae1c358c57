#[cfg(all(sse2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod sse2;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

pub mod dispatch;
#[allow(clippy::excessive_precision)]
pub mod lanes;
pub mod slice;
pub mod traits;

pub use dispatch::Backend;
pub use lanes::LANE_COUNT;
pub use traits::SimdLn;
