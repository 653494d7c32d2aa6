//! Token-based API with no per-call capability detection.
//!
//! The [`crate::matrix`] functions ask the CPU for support on every call.
//! When a hot loop makes many small calls, obtain a token once instead and
//! pass it along; the token itself is the proof that the kernel may run.
//!
//! Requires the `mage` feature.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bitlane::mage::{self, Desktop64, SimdToken};
//! use bitlane::{BitOp, Element};
//!
//! let token = Desktop64::try_new().expect("need AVX2");
//! let origin = vec![0x1234u16; 10_000];
//! let mut target = vec![0u16; 10_000];
//! mage::transform_v256(token, BitOp::Xor, &origin, &mut target, u16::rescale_mask(0xFF));
//! ```
//!
//! # Tokens
//!
//! | Function | x86-64 | AArch64 | wasm32 |
//! |----------|--------|---------|--------|
//! | `*_v128` | [`X64V2Token`] | `Arm64` | `Simd128Token` |
//! | `*_v256` | [`Desktop64`] | n/a | n/a |

pub use archmage::SimdToken;

#[cfg(target_arch = "x86_64")]
pub use archmage::{Desktop64, X64V2Token};

#[cfg(target_arch = "aarch64")]
pub use archmage::Arm64;

#[cfg(target_arch = "wasm32")]
pub use archmage::Simd128Token;

/// Apply an operator with 128-bit registers, given a token for this target.
///
/// `mask` is the full-width mask, ignored for `BitOp::Not`.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
pub use crate::rites::v128::transform_with as transform_v128;

/// In-place form of [`transform_v128`].
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32"))]
pub use crate::rites::v128::transform_in_place_with as transform_in_place_v128;

/// Apply an operator with 256-bit registers, given a [`Desktop64`] token.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[cfg(target_arch = "x86_64")]
pub use crate::rites::v256::transform_with as transform_v256;

/// In-place form of [`transform_v256`].
#[cfg(target_arch = "x86_64")]
pub use crate::rites::v256::transform_in_place_with as transform_in_place_v256;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::op::BitOp;
    use crate::scalar;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_v256_with_token() {
        let Some(token) = Desktop64::try_new() else {
            eprintln!("Skipping test: AVX2 not available");
            return;
        };

        let origin: Vec<i32> = (0..77).map(|i| i * 0x0102_0304 - 0x0A0B_0C0D).collect();
        let mask = i32::rescale_mask(0x99);
        for op in BitOp::ALL {
            let mut expected = vec![0i32; origin.len()];
            scalar::transform(op, &origin, &mut expected, mask);
            let mut got = vec![0i32; origin.len()];
            transform_v256(token, op, &origin, &mut got, mask);
            assert_eq!(got, expected, "{op}");
        }
    }

    #[test]
    fn test_v128_in_place_with_token() {
        let Some(token) = X64V2Token::try_new() else {
            eprintln!("Skipping test: SSE4.2 tier not available");
            return;
        };

        let origin: Vec<u8> = (0..=200).collect();
        let mut values = origin.clone();
        transform_in_place_v128(token, BitOp::Not, &mut values, 0);
        transform_in_place_v128(token, BitOp::Not, &mut values, 0);
        assert_eq!(values, origin);
    }
}
