//! SIMD element-wise bitwise transforms over integer and POD-record slices.
//!
//! Applies AND, OR, XOR, NAND, NOR, XNOR or NOT to every element of a slice
//! using 128-bit or 256-bit registers. Capability is detected at runtime;
//! whole registers go through the vector kernel and the tail that does not
//! fill one goes through a scalar loop that produces identical bits.
//!
//! # Module Organization
//!
//! - [`default`] - **Recommended API**, always completes (widest path available)
//! - [`matrix`] - Named entry per operator and register width, reports [`Outcome`]
//! - [`record`] - NOT over arbitrary fixed-size [`Pod`](bytemuck::Pod) records
//! - [`simd`] - Generic engine taking [`BitOp`] and [`VectorWidth`] as values
//! - [`scalar`] - Element-at-a-time path (fallback and reference)
//! - [`detect`] - Runtime capability detection
//!
//! # Quick Start
//!
//! ```rust
//! use bitlane::default::xor_in_place;
//!
//! let mut values: Vec<u16> = (0..1000).collect();
//! xor_in_place(&mut values, 0xFF);  // mask becomes 0xFFFF for u16
//! xor_in_place(&mut values, 0xFF);
//! assert_eq!(values, (0..1000).collect::<Vec<u16>>());
//! ```
//!
//! # Pinning the Register Width
//!
//! ```rust
//! use bitlane::{matrix, scalar, BitOp, Outcome};
//!
//! let origin = [1u32, 2, 3, 4, 5, 6, 7];
//! let mut target = [0u32; 7];
//! if matrix::and_128(&origin, &mut target, 0x0B) == Outcome::NotPerformed {
//!     // target is untouched; run the scalar path yourself
//!     scalar::transform_byte_mask(BitOp::And, &origin, &mut target, 0x0B);
//! }
//! assert_eq!(target, [1, 2, 3, 0, 1, 2, 3]);
//! ```
//!
//! # Choosing the Right API
//!
//! | Use Case | Recommended Function |
//! |----------|---------------------|
//! | Any slice, any CPU | [`default::and`], [`default::not_in_place`], … |
//! | Fixed register width | [`matrix::and_256`], [`matrix::not_128`], … |
//! | Operator chosen at runtime | [`simd::transform`] |
//! | Odd-sized records | [`record::not_records`] |
//! | Token obtained once (`mage` feature) | `mage::transform_v256` |
//!
//! # Feature Flags
//!
//! - `std` (default): Enable std library support
//! - `mage`: Token-based API without per-call detection
//!
//! # `no_std` Support
//!
//! This crate is `no_std` compatible and never allocates. Disable the `std`
//! feature:
//!
//! ```toml
//! bitlane = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(all(test, not(feature = "std")))]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// ============================================================================
// Public modules
// ============================================================================

/// Recommended API: widest available path, scalar fallback built in.
///
/// See module documentation for details.
pub mod default;

/// Named entry points, one per operator and register width.
pub mod matrix;

/// Byte-wise NOT over fixed-size POD records.
pub mod record;

/// Generic vector engine with operator and width as values.
pub mod simd;

/// Scalar (element-at-a-time) transforms.
///
/// Used for remainders, as the fallback, and as the test reference.
pub mod scalar;

/// Runtime CPU capability detection.
pub mod detect;

/// Mask broadcasting from one byte to a whole register.
pub mod mask;

/// Inlineable token-gated kernels, organized by register width.
pub mod rites;

/// Token-based API using archmage for zero dispatch overhead.
///
/// Requires the `mage` feature.
#[cfg(feature = "mage")]
pub mod mage;

// ============================================================================
// Internal modules
// ============================================================================

mod element;
mod op;

pub use detect::{VectorWidth, best_width, is_supported};
pub use element::Element;
pub use op::{BitOp, Outcome};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::*;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_api_consistency() {
        // Every path must agree with the scalar reference whenever it runs.
        let origin: Vec<u64> = (0..257u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
        let mut reference = vec![0u64; origin.len()];
        scalar::transform_byte_mask(BitOp::Nor, &origin, &mut reference, 0x2D);

        let mut via_default = vec![0u64; origin.len()];
        default::nor(&origin, &mut via_default, 0x2D);
        assert_eq!(via_default, reference);

        for width in VectorWidth::ALL {
            let mut via_simd = vec![0u64; origin.len()];
            let mut via_matrix = vec![0u64; origin.len()];
            let a = simd::transform_byte_mask(BitOp::Nor, width, &origin, &mut via_simd, 0x2D);
            let b = match width {
                VectorWidth::V128 => matrix::nor_128(&origin, &mut via_matrix, 0x2D),
                VectorWidth::V256 => matrix::nor_256(&origin, &mut via_matrix, 0x2D),
            };
            assert_eq!(a, b);
            if a.is_performed() {
                assert_eq!(via_simd, reference, "{width:?}");
                assert_eq!(via_matrix, reference, "{width:?}");
            }
        }
    }

    #[test]
    fn test_unsupported_width_leaves_target_untouched() {
        let origin = [0x55u8; 70];
        for width in VectorWidth::ALL {
            let mut target = [0xEEu8; 70];
            let outcome = simd::transform_byte_mask(BitOp::And, width, &origin, &mut target, 0x0F);
            if outcome.is_performed() {
                assert_eq!(target, [0x05u8; 70]);
            } else {
                assert!(!is_supported(width));
                assert_eq!(target, [0xEEu8; 70]);
            }
        }
    }
}
