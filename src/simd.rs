//! Generic engine entry: any operator, any element type, either width.
//!
//! Every named function in [`crate::matrix`], [`crate::record`] and
//! [`crate::default`] ends up here. The call either completes or performs no
//! work at all:
//!
//! 1. lengths are checked (panic on mismatch, nothing written)
//! 2. the capability detector is asked for `width`; if absent, return
//!    [`Outcome::NotPerformed`] without touching the target
//! 3. the mask is tiled across one register and whole registers are processed
//! 4. the remaining `len % lanes` elements are finished by [`crate::scalar`]

use crate::detect::VectorWidth;
use crate::element::Element;
use crate::op::{BitOp, Outcome};
use crate::rites::{v128, v256};

/// Apply `op` element-wise from `origin` into `target` using `width`-bit
/// registers.
///
/// `mask` is the full-width mask and is ignored for [`BitOp::Not`]. Use
/// [`Element::rescale_mask`] to build one from a byte.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn transform<T: Element>(
    op: BitOp,
    width: VectorWidth,
    origin: &[T],
    target: &mut [T],
    mask: T,
) -> Outcome {
    match width {
        VectorWidth::V128 => v128::transform(op, origin, target, mask),
        VectorWidth::V256 => v256::transform(op, origin, target, mask),
    }
}

/// Apply `op` element-wise to `values` in place using `width`-bit registers.
#[inline]
pub fn transform_in_place<T: Element>(
    op: BitOp,
    width: VectorWidth,
    values: &mut [T],
    mask: T,
) -> Outcome {
    match width {
        VectorWidth::V128 => v128::transform_in_place(op, values, mask),
        VectorWidth::V256 => v256::transform_in_place(op, values, mask),
    }
}

/// [`transform`] with an 8-bit mask rescaled to `T`.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn transform_byte_mask<T: Element>(
    op: BitOp,
    width: VectorWidth,
    origin: &[T],
    target: &mut [T],
    mask: u8,
) -> Outcome {
    transform(op, width, origin, target, T::rescale_mask(mask))
}

/// [`transform_in_place`] with an 8-bit mask rescaled to `T`.
#[inline]
pub fn transform_in_place_byte_mask<T: Element>(
    op: BitOp,
    width: VectorWidth,
    values: &mut [T],
    mask: u8,
) -> Outcome {
    transform_in_place(op, width, values, T::rescale_mask(mask))
}
