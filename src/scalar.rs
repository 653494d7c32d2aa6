//! Scalar (one element at a time) bitwise transforms.
//!
//! Three roles share this code:
//! - the remainder handler that finishes the tail a vector kernel cannot fill
//!   a whole lane with
//! - the fallback a caller runs when a vector entry point reports
//!   [`Outcome::NotPerformed`](crate::Outcome::NotPerformed)
//! - the reference the vector paths are tested against
//!
//! The operator is matched once per call, never per element.

use crate::element::Element;
use crate::op::BitOp;

/// Apply `op` element-wise from `origin` into `target`.
///
/// `mask` is the full-width mask (see [`Element::rescale_mask`]) and is
/// ignored for [`BitOp::Not`].
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn transform<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: T) {
    assert_eq!(origin.len(), target.len());

    macro_rules! each {
        (|$x:ident| $body:expr) => {
            for (out, &$x) in target.iter_mut().zip(origin.iter()) {
                *out = $body;
            }
        };
    }

    match op {
        BitOp::And => each!(|x| x & mask),
        BitOp::Or => each!(|x| x | mask),
        BitOp::Xor => each!(|x| x ^ mask),
        BitOp::Nand => each!(|x| !(x & mask)),
        BitOp::Nor => each!(|x| !(x | mask)),
        BitOp::Xnor => each!(|x| !(x ^ mask)),
        BitOp::Not => each!(|x| !x),
    }
}

/// Apply `op` element-wise to `values` in place.
#[inline]
pub fn transform_in_place<T: Element>(op: BitOp, values: &mut [T], mask: T) {
    macro_rules! each {
        (|$x:ident| $body:expr) => {
            for v in values.iter_mut() {
                let $x = *v;
                *v = $body;
            }
        };
    }

    match op {
        BitOp::And => each!(|x| x & mask),
        BitOp::Or => each!(|x| x | mask),
        BitOp::Xor => each!(|x| x ^ mask),
        BitOp::Nand => each!(|x| !(x & mask)),
        BitOp::Nor => each!(|x| !(x | mask)),
        BitOp::Xnor => each!(|x| !(x ^ mask)),
        BitOp::Not => each!(|x| !x),
    }
}

/// [`transform`] with an 8-bit mask rescaled to `T`.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn transform_byte_mask<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: u8) {
    transform(op, origin, target, T::rescale_mask(mask));
}

/// [`transform_in_place`] with an 8-bit mask rescaled to `T`.
#[inline]
pub fn transform_in_place_byte_mask<T: Element>(op: BitOp, values: &mut [T], mask: u8) {
    transform_in_place(op, values, T::rescale_mask(mask));
}
