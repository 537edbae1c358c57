//! Backend selection for the vector logarithm.
//!
//! The best backend is probed once and cached. A backend that was not
//! compiled in, or that the CPU does not support, is never executed: calls
//! naming it are downgraded to [`Backend::Fallback`], which runs the scalar
//! reference approximation lane by lane.

use std::fmt;
use std::sync::OnceLock;

use crate::scalar::logf_reference;
use crate::simd::lanes::{ln_portable, LANE_COUNT};

/// A realisation of the 4-lane logarithm kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// x86 / x86_64 SSE2 intrinsics.
    Sse2,
    /// AArch64 NEON intrinsics.
    Neon,
    /// The lane kernel on plain arrays. Never chosen by [`Backend::detect`].
    Portable,
    /// Lane-wise [`logf_reference`](crate::scalar::logf_reference).
    Fallback,
}

static DETECTED: OnceLock<Backend> = OnceLock::new();

impl Backend {
    /// Returns the backend used by [`approx_log_vector`](crate::approx_log_vector).
    ///
    /// Probed on first use, then cached for the lifetime of the process.
    pub fn detect() -> Backend {
        *DETECTED.get_or_init(|| {
            let backend = Self::probe();
            log::debug!("fastlog: using {backend} backend for vector logarithm");
            backend
        })
    }

    fn probe() -> Backend {
        if Backend::Neon.is_available() {
            return Backend::Neon;
        }
        if Backend::Sse2.is_available() {
            return Backend::Sse2;
        }
        Backend::Fallback
    }

    /// Whether this backend can run in the current build on the current CPU.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Sse2 => {
                #[cfg(all(sse2, any(target_arch = "x86", target_arch = "x86_64")))]
                let available = is_x86_feature_detected!("sse2");
                #[cfg(not(all(sse2, any(target_arch = "x86", target_arch = "x86_64"))))]
                let available = false;
                available
            }
            Backend::Neon => {
                #[cfg(all(neon, target_arch = "aarch64"))]
                let available = std::arch::is_aarch64_feature_detected!("neon");
                #[cfg(not(all(neon, target_arch = "aarch64")))]
                let available = false;
                available
            }
            Backend::Portable | Backend::Fallback => true,
        }
    }

    /// Returns `self` if it is available, [`Backend::Fallback`] otherwise.
    ///
    /// Logs at `trace` on every call that downgrades.
    pub fn resolve(self) -> Backend {
        let resolved = self.resolve_silent();
        if resolved != self {
            log::trace!("fastlog: {self} backend unavailable, using fallback");
        }
        resolved
    }

    fn resolve_silent(self) -> Backend {
        if self.is_available() {
            self
        } else {
            Backend::Fallback
        }
    }

    /// Lowercase identifier, as used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Sse2 => "sse2",
            Backend::Neon => "neon",
            Backend::Portable => "portable",
            Backend::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the logarithm on one lane vector with the given backend.
#[inline(always)]
pub(crate) fn ln_block(backend: Backend, xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    ln_resolved_block(backend.resolve(), xs)
}

/// Same as [`ln_block`] for a backend the caller already resolved.
///
/// Availability is still checked, without logging, so an unresolved
/// backend degrades to the fallback instead of running.
#[inline(always)]
pub(crate) fn ln_resolved_block(backend: Backend, xs: [f32; LANE_COUNT]) -> [f32; LANE_COUNT] {
    match backend.resolve_silent() {
        #[cfg(all(sse2, any(target_arch = "x86", target_arch = "x86_64")))]
        // SAFETY: resolve_silent() confirmed SSE2 at runtime.
        Backend::Sse2 => unsafe { crate::simd::sse2::math::ln_f32x4(xs) },
        #[cfg(all(neon, target_arch = "aarch64"))]
        // SAFETY: resolve_silent() confirmed NEON at runtime.
        Backend::Neon => unsafe { crate::simd::neon::math::ln_f32x4(xs) },
        Backend::Portable => ln_portable(xs),
        _ => xs.map(logf_reference),
    }
}
