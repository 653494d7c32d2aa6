//! 128-bit kernels.
//!
//! | Target | Detecting entries | Token for `transform_with` |
//! |--------|-------------------|----------------------------|
//! | x86-64 | always (SSE2 baseline) | `X64V2Token` |
//! | AArch64 | `Arm64` (NEON) | `Arm64` |
//! | wasm32 | `Simd128Token` (SIMD128) | `Simd128Token` |
//!
//! `wide::u64x2` compiles to SSE2, NEON or SIMD128 whenever the respective
//! feature is part of the build, which is always the case on x86-64 and
//! AArch64 and is the only case in which `Simd128Token` exists on wasm32.
//!
//! On any other architecture [`transform`] and [`transform_in_place`] always
//! report [`Outcome::NotPerformed`].

use crate::element::Element;
use crate::op::{BitOp, Outcome};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
use core::ops::{BitAnd, BitOr, BitXor};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
use wide::u64x2;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn load(bytes: &[u8; 16]) -> u64x2 {
    bytemuck::cast(*bytes)
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn store(dst: &mut [u8; 16], v: u64x2) {
    *dst = bytemuck::cast(v);
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn bitwise_x2(op: BitOp, origin: &[u8], target: &mut [u8], pattern: [u8; 16]) {
    bitwise_lanes!(
        op, [origin, target], 16,
        load = load, store = store,
        and = BitAnd::bitand, or = BitOr::bitor, xor = BitXor::bitxor,
        mask = load(&pattern), ones = load(&[0xFF; 16]),
    );
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn bitwise_in_place_x2(op: BitOp, values: &mut [u8], pattern: [u8; 16]) {
    bitwise_lanes!(
        op, [values], 16,
        load = load, store = store,
        and = BitAnd::bitand, or = BitOr::bitor, xor = BitXor::bitxor,
        mask = load(&pattern), ones = load(&[0xFF; 16]),
    );
}

/// Stamp out the token-taking entries for one 128-bit token type.
macro_rules! v128_kernels {
    ($token:ident) => {
        use archmage::arcane;

        pub use archmage::$token;

        use crate::element::Element;
        use crate::op::BitOp;
        use crate::rites::{split_apply, split_apply_in_place};

        /// Token type proving 128-bit support on this target.
        pub type Token = $token;

        #[arcane]
        fn bitwise(_token: $token, op: BitOp, origin: &[u8], target: &mut [u8], pattern: [u8; 16]) {
            super::bitwise_x2(op, origin, target, pattern);
        }

        #[arcane]
        fn bitwise_in_place(_token: $token, op: BitOp, values: &mut [u8], pattern: [u8; 16]) {
            super::bitwise_in_place_x2(op, values, pattern);
        }

        /// Apply `op` from `origin` into `target` using 16-byte registers.
        ///
        /// Whole registers go through the vector kernel; the trailing
        /// `len % lanes` elements go through [`crate::scalar::transform`].
        ///
        /// # Panics
        /// Panics if `origin.len() != target.len()`.
        pub fn transform_with<T: Element>(
            token: $token,
            op: BitOp,
            origin: &[T],
            target: &mut [T],
            mask: T,
        ) {
            split_apply::<T, 16>(op, origin, target, mask, |op, origin, target, pattern| {
                bitwise(token, op, origin, target, pattern)
            });
        }

        /// Apply `op` to `values` in place using 16-byte registers.
        pub fn transform_in_place_with<T: Element>(
            token: $token,
            op: BitOp,
            values: &mut [T],
            mask: T,
        ) {
            split_apply_in_place::<T, 16>(op, values, mask, |op, values, pattern| {
                bitwise_in_place(token, op, values, pattern)
            });
        }
    };
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    v128_kernels!(X64V2Token);

    // SSE2 is part of the x86-64 baseline, so the detecting entries need no
    // token and run on every x86-64 CPU.

    #[inline(always)]
    pub(super) fn transform_sse2<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: T) {
        split_apply::<T, 16>(op, origin, target, mask, super::bitwise_x2);
    }

    #[inline(always)]
    pub(super) fn transform_in_place_sse2<T: Element>(op: BitOp, values: &mut [T], mask: T) {
        split_apply_in_place::<T, 16>(op, values, mask, super::bitwise_in_place_x2);
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    v128_kernels!(Arm64);
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    v128_kernels!(Simd128Token);
}

#[cfg(target_arch = "x86_64")]
pub use x86::*;

#[cfg(target_arch = "aarch64")]
pub use neon::*;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(any(target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn transform_gated<T: Element>(
    token: Option<Token>,
    op: BitOp,
    origin: &[T],
    target: &mut [T],
    mask: T,
) -> Outcome {
    crate::rites::gated(token, |token| transform_with(token, op, origin, target, mask))
}

#[cfg(any(target_arch = "aarch64", target_arch = "wasm32"))]
#[inline(always)]
fn transform_in_place_gated<T: Element>(
    token: Option<Token>,
    op: BitOp,
    values: &mut [T],
    mask: T,
) -> Outcome {
    crate::rites::gated(token, |token| transform_in_place_with(token, op, values, mask))
}

/// Apply `op` with 128-bit registers if the CPU supports them.
///
/// Always performed on x86-64. On [`Outcome::NotPerformed`] the target has
/// not been written.
///
/// # Panics
/// Panics if `origin.len() != target.len()`, before any capability check.
#[inline]
pub fn transform<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: T) -> Outcome {
    assert_eq!(origin.len(), target.len());

    #[cfg(target_arch = "x86_64")]
    {
        x86::transform_sse2(op, origin, target, mask);
        Outcome::Performed
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "wasm32"))]
    {
        use archmage::SimdToken;
        transform_gated(Token::try_new(), op, origin, target, mask)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32")))]
    {
        let _ = (op, mask);
        Outcome::NotPerformed
    }
}

/// In-place variant of [`transform`].
#[inline]
pub fn transform_in_place<T: Element>(op: BitOp, values: &mut [T], mask: T) -> Outcome {
    #[cfg(target_arch = "x86_64")]
    {
        x86::transform_in_place_sse2(op, values, mask);
        Outcome::Performed
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "wasm32"))]
    {
        use archmage::SimdToken;
        transform_in_place_gated(Token::try_new(), op, values, mask)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32")))]
    {
        let _ = (op, values, mask);
        Outcome::NotPerformed
    }
}
