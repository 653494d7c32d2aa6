//! Runtime capability detection for the two vector widths.
//!
//! Detection goes through archmage tokens, which cache the CPUID/HWCAP lookup
//! after the first call, so asking once per engine call is cheap.
//!
//! | Width | x86-64 | AArch64 | wasm32 |
//! |-------|--------|---------|--------|
//! | [`VectorWidth::V128`] | always (SSE2 baseline) | `Arm64` (NEON) | `Simd128Token` |
//! | [`VectorWidth::V256`] | `Desktop64` (AVX2+FMA) | n/a | n/a |
//!
//! Every other target reports both widths unsupported.

#[allow(unused_imports)]
use archmage::SimdToken;

use crate::element::Element;

/// Width of the SIMD register the kernel runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VectorWidth {
    /// 128-bit registers (SSE / NEON / SIMD128).
    V128,
    /// 256-bit registers (AVX2).
    V256,
}

impl VectorWidth {
    /// Both widths, narrowest first.
    pub const ALL: [VectorWidth; 2] = [VectorWidth::V128, VectorWidth::V256];

    /// Register width in bits.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            VectorWidth::V128 => 128,
            VectorWidth::V256 => 256,
        }
    }

    /// Register width in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Elements of `T` that fit in one register (`L`).
    #[inline]
    pub const fn lanes<T: Element>(self) -> usize {
        self.bytes() / T::BYTES
    }

    /// Whether the running CPU can execute this width.
    #[inline]
    pub fn is_supported(self) -> bool {
        is_supported(self)
    }
}

/// Whether the running CPU supports vector kernels of `width`.
///
/// Pure query with no side effects beyond archmage's internal feature cache.
#[inline]
pub fn is_supported(width: VectorWidth) -> bool {
    match width {
        VectorWidth::V128 => supports_v128(),
        VectorWidth::V256 => supports_v256(),
    }
}

/// The widest supported width, or `None` when only scalar code can run.
#[inline]
pub fn best_width() -> Option<VectorWidth> {
    VectorWidth::ALL
        .into_iter()
        .rev()
        .find(|width| is_supported(*width))
}

// SSE2 is part of the x86-64 baseline.
#[cfg(target_arch = "x86_64")]
#[inline]
fn supports_v128() -> bool {
    true
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn supports_v128() -> bool {
    archmage::Arm64::try_new().is_some()
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn supports_v128() -> bool {
    archmage::Simd128Token::try_new().is_some()
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32")))]
#[inline]
fn supports_v128() -> bool {
    false
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn supports_v256() -> bool {
    archmage::Desktop64::try_new().is_some()
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn supports_v256() -> bool {
    false
}
