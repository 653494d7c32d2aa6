//! Recommended API: always completes, on any CPU.
//!
//! Each function tries 256-bit registers, then 128-bit, then the scalar
//! loop, so there is no [`Outcome`](crate::Outcome) to handle. Use
//! [`crate::matrix`] instead when you need to pin the register width or want
//! to know whether a vector path ran.
//!
//! # Quick Start
//!
//! ```rust
//! use bitlane::default::{and, not_in_place};
//!
//! let origin = [0xFFFF_FFFFu32, 0x1234_5678, 0xDEAD_BEEF];
//! let mut target = [0u32; 3];
//! and(&origin, &mut target, 0x0B);
//! assert_eq!(target, [0x0B0B_0B0B, 0x0200_0208, 0x0A09_0A0B]);
//!
//! let mut values = vec![0u8; 100];
//! not_in_place(&mut values);
//! assert!(values.iter().all(|&v| v == 0xFF));
//! ```

use bytemuck::Pod;

use crate::detect::VectorWidth;
use crate::element::Element;
use crate::op::BitOp;
use crate::{scalar, simd};

/// Apply `op` with the widest available path.
///
/// `mask` is the full-width mask, ignored for [`BitOp::Not`].
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn transform<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: T) {
    if simd::transform(op, VectorWidth::V256, origin, target, mask).is_performed() {
        return;
    }
    if simd::transform(op, VectorWidth::V128, origin, target, mask).is_performed() {
        return;
    }
    scalar::transform(op, origin, target, mask);
}

/// In-place form of [`transform`].
#[inline]
pub fn transform_in_place<T: Element>(op: BitOp, values: &mut [T], mask: T) {
    if simd::transform_in_place(op, VectorWidth::V256, values, mask).is_performed() {
        return;
    }
    if simd::transform_in_place(op, VectorWidth::V128, values, mask).is_performed() {
        return;
    }
    scalar::transform_in_place(op, values, mask);
}

macro_rules! masked {
    ($name:ident, $in_place:ident, $op:ident, $desc:literal) => {
        #[doc = concat!("`target[i] = ", $desc, "`, mask rescaled to the element width.")]
        ///
        /// # Panics
        /// Panics if `origin.len() != target.len()`.
        #[inline]
        pub fn $name<T: Element>(origin: &[T], target: &mut [T], mask: u8) {
            transform(BitOp::$op, origin, target, T::rescale_mask(mask));
        }

        #[doc = concat!("In-place form of [`", stringify!($name), "`].")]
        #[inline]
        pub fn $in_place<T: Element>(values: &mut [T], mask: u8) {
            transform_in_place(BitOp::$op, values, T::rescale_mask(mask));
        }
    };
}

masked!(and, and_in_place, And, "origin[i] & mask");
masked!(or, or_in_place, Or, "origin[i] | mask");
masked!(xor, xor_in_place, Xor, "origin[i] ^ mask");
masked!(nand, nand_in_place, Nand, "!(origin[i] & mask)");
masked!(nor, nor_in_place, Nor, "!(origin[i] | mask)");
masked!(xnor, xnor_in_place, Xnor, "!(origin[i] ^ mask)");

/// `target[i] = !origin[i]`.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn not<T: Element>(origin: &[T], target: &mut [T]) {
    transform(BitOp::Not, origin, target, T::zeroed());
}

/// In-place form of [`not`].
#[inline]
pub fn not_in_place<T: Element>(values: &mut [T]) {
    transform_in_place(BitOp::Not, values, T::zeroed());
}

/// Byte-wise NOT over POD records of any size.
///
/// # Panics
/// Panics if `origin.len() != target.len()` or if `R` is zero-sized.
#[inline]
pub fn not_records<R: Pod>(origin: &[R], target: &mut [R]) {
    assert_eq!(origin.len(), target.len());
    not::<u8>(bytemuck::cast_slice(origin), bytemuck::cast_slice_mut(target));
}

/// In-place form of [`not_records`].
///
/// # Panics
/// Panics if `R` is zero-sized.
#[inline]
pub fn not_records_in_place<R: Pod>(values: &mut [R]) {
    not_in_place::<u8>(bytemuck::cast_slice_mut(values));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_matches_scalar_reference() {
        let origin: Vec<u32> = (0..1003u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
        for op in BitOp::ALL {
            let mask = u32::rescale_mask(0x81);
            let mut expected = vec![0u32; origin.len()];
            scalar::transform(op, &origin, &mut expected, mask);

            let mut got = vec![0u32; origin.len()];
            transform(op, &origin, &mut got, mask);
            assert_eq!(got, expected, "{op}");

            let mut values = origin.clone();
            transform_in_place(op, &mut values, mask);
            assert_eq!(values, expected, "{op} in place");
        }
    }

    #[test]
    fn test_named_functions() {
        let origin = [0x00u8, 0x0F, 0xF0, 0xFF, 0x5A];
        let mut t = [0u8; 5];

        and(&origin, &mut t, 0x3C);
        assert_eq!(t, [0x00, 0x0C, 0x30, 0x3C, 0x18]);
        or(&origin, &mut t, 0x3C);
        assert_eq!(t, [0x3C, 0x3F, 0xFC, 0xFF, 0x7E]);
        xor(&origin, &mut t, 0x3C);
        assert_eq!(t, [0x3C, 0x33, 0xCC, 0xC3, 0x66]);
        nand(&origin, &mut t, 0x3C);
        assert_eq!(t, [0xFF, 0xF3, 0xCF, 0xC3, 0xE7]);
        nor(&origin, &mut t, 0x3C);
        assert_eq!(t, [0xC3, 0xC0, 0x03, 0x00, 0x81]);
        xnor(&origin, &mut t, 0x3C);
        assert_eq!(t, [0xC3, 0xCC, 0x33, 0x3C, 0x99]);
        not(&origin, &mut t);
        assert_eq!(t, [0xFF, 0xF0, 0x0F, 0x00, 0xA5]);
    }

    #[test]
    fn test_in_place_named_functions() {
        let mut v = [0x1234i16, -1, 0];
        and_in_place(&mut v, 0xF0);
        assert_eq!(v, [0x1030, 0xF0F0u16 as i16, 0]);
        or_in_place(&mut v, 0x01);
        assert_eq!(v, [0x1131, 0xF1F1u16 as i16, 0x0101]);
        xor_in_place(&mut v, 0xFF);
        assert_eq!(v, [!0x1131, !(0xF1F1u16 as i16), !0x0101]);
        not_in_place(&mut v);
        assert_eq!(v, [0x1131, 0xF1F1u16 as i16, 0x0101]);
        nand_in_place(&mut v, 0xFF);
        assert_eq!(v, [!0x1131, !(0xF1F1u16 as i16), !0x0101]);
        nor_in_place(&mut v, 0x00);
        assert_eq!(v, [0x1131, 0xF1F1u16 as i16, 0x0101]);
        xnor_in_place(&mut v, 0x00);
        assert_eq!(v, [!0x1131, !(0xF1F1u16 as i16), !0x0101]);
    }

    #[test]
    fn test_records() {
        let origin: Vec<[u8; 7]> = (0..10u8).map(|i| [i; 7]).collect();
        let mut target = vec![[0u8; 7]; 10];
        not_records(&origin, &mut target);
        for (o, t) in origin.iter().zip(target.iter()) {
            assert_eq!(t.map(|b| !b), *o);
        }
        not_records_in_place(&mut target);
        assert_eq!(target, origin);
    }
}
