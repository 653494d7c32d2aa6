//! Named entry points: one function per operator × register width.
//!
//! Each is generic over the element type, so `and_128::<u32>` and
//! `and_128::<i8>` are separate monomorphized kernels chosen at compile time.
//! Nothing here dispatches on the operator at runtime.
//!
//! All functions return [`Outcome::NotPerformed`] without writing anything
//! when the CPU lacks the width; fall back to [`crate::scalar`] then, or call
//! [`crate::default`] which does so itself.
//!
//! | Operator | 128-bit | 256-bit |
//! |----------|---------|---------|
//! | AND | [`and_128`] | [`and_256`] |
//! | OR | [`or_128`] | [`or_256`] |
//! | XOR | [`xor_128`] | [`xor_256`] |
//! | NAND | [`nand_128`] | [`nand_256`] |
//! | NOR | [`nor_128`] | [`nor_256`] |
//! | XNOR | [`xnor_128`] | [`xnor_256`] |
//! | NOT | [`not_128`] | [`not_256`] |
//!
//! Every function has an `_in_place` sibling taking a single `&mut [T]`.

use crate::detect::VectorWidth;
use crate::element::Element;
use crate::op::{BitOp, Outcome};
use crate::simd;

macro_rules! masked_entry {
    ($name:ident, $in_place:ident, $op:ident, $width:ident, $bits:literal, $desc:literal) => {
        #[doc = concat!("`target[i] = ", $desc, "` with ", $bits, "-bit registers.")]
        ///
        /// `mask` is rescaled to the element width (`0x0B` becomes
        /// `0x0B0B_0B0B` for 32-bit elements).
        ///
        /// # Panics
        /// Panics if `origin.len() != target.len()`.
        #[inline]
        pub fn $name<T: Element>(origin: &[T], target: &mut [T], mask: u8) -> Outcome {
            simd::transform(
                BitOp::$op,
                VectorWidth::$width,
                origin,
                target,
                T::rescale_mask(mask),
            )
        }

        #[doc = concat!("In-place form of [`", stringify!($name), "`].")]
        #[inline]
        pub fn $in_place<T: Element>(values: &mut [T], mask: u8) -> Outcome {
            simd::transform_in_place(BitOp::$op, VectorWidth::$width, values, T::rescale_mask(mask))
        }
    };
}

macro_rules! unary_entry {
    ($name:ident, $in_place:ident, $width:ident, $bits:literal) => {
        #[doc = concat!("`target[i] = !origin[i]` with ", $bits, "-bit registers.")]
        ///
        /// # Panics
        /// Panics if `origin.len() != target.len()`.
        #[inline]
        pub fn $name<T: Element>(origin: &[T], target: &mut [T]) -> Outcome {
            simd::transform(BitOp::Not, VectorWidth::$width, origin, target, T::zeroed())
        }

        #[doc = concat!("In-place form of [`", stringify!($name), "`].")]
        #[inline]
        pub fn $in_place<T: Element>(values: &mut [T]) -> Outcome {
            simd::transform_in_place(BitOp::Not, VectorWidth::$width, values, T::zeroed())
        }
    };
}

// ============================================================================
// 128-bit
// ============================================================================

masked_entry!(and_128, and_128_in_place, And, V128, "128", "origin[i] & mask");
masked_entry!(or_128, or_128_in_place, Or, V128, "128", "origin[i] | mask");
masked_entry!(xor_128, xor_128_in_place, Xor, V128, "128", "origin[i] ^ mask");
masked_entry!(nand_128, nand_128_in_place, Nand, V128, "128", "!(origin[i] & mask)");
masked_entry!(nor_128, nor_128_in_place, Nor, V128, "128", "!(origin[i] | mask)");
masked_entry!(xnor_128, xnor_128_in_place, Xnor, V128, "128", "!(origin[i] ^ mask)");
unary_entry!(not_128, not_128_in_place, V128, "128");

// ============================================================================
// 256-bit
// ============================================================================

masked_entry!(and_256, and_256_in_place, And, V256, "256", "origin[i] & mask");
masked_entry!(or_256, or_256_in_place, Or, V256, "256", "origin[i] | mask");
masked_entry!(xor_256, xor_256_in_place, Xor, V256, "256", "origin[i] ^ mask");
masked_entry!(nand_256, nand_256_in_place, Nand, V256, "256", "!(origin[i] & mask)");
masked_entry!(nor_256, nor_256_in_place, Nor, V256, "256", "!(origin[i] | mask)");
masked_entry!(xnor_256, xnor_256_in_place, Xnor, V256, "256", "!(origin[i] ^ mask)");
unary_entry!(not_256, not_256_in_place, V256, "256");
