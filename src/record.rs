//! Bitwise NOT over arbitrary fixed-size POD records.
//!
//! A record is any [`Pod`] type: `[u8; 7]`, `[u8; 31]`, or a `#[repr(C)]`
//! struct with no padding. Its size need not be a power of two. Records are
//! reinterpreted as one flat byte slice of `size_of::<R>() * len` bytes and
//! routed through the `u8` NOT kernel, so no record-level meaning is applied.
//! Lane boundaries therefore fall wherever they fall inside a record; NOT is
//! per bit, so that cannot change the result.

use bytemuck::Pod;

use crate::detect::VectorWidth;
use crate::op::{BitOp, Outcome};
use crate::simd;

/// `target[i] = !origin[i]` byte-wise, with `width`-bit registers.
///
/// # Panics
/// Panics if `origin.len() != target.len()` or if `R` is zero-sized.
#[inline]
pub fn not_records<R: Pod>(width: VectorWidth, origin: &[R], target: &mut [R]) -> Outcome {
    assert_eq!(origin.len(), target.len());
    simd::transform::<u8>(
        BitOp::Not,
        width,
        bytemuck::cast_slice(origin),
        bytemuck::cast_slice_mut(target),
        0,
    )
}

/// In-place form of [`not_records`].
///
/// # Panics
/// Panics if `R` is zero-sized.
#[inline]
pub fn not_records_in_place<R: Pod>(width: VectorWidth, values: &mut [R]) -> Outcome {
    simd::transform_in_place::<u8>(BitOp::Not, width, bytemuck::cast_slice_mut(values), 0)
}

/// [`not_records`] with 128-bit registers.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn not_records_128<R: Pod>(origin: &[R], target: &mut [R]) -> Outcome {
    not_records(VectorWidth::V128, origin, target)
}

/// [`not_records`] with 256-bit registers.
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline]
pub fn not_records_256<R: Pod>(origin: &[R], target: &mut [R]) -> Outcome {
    not_records(VectorWidth::V256, origin, target)
}

/// [`not_records_in_place`] with 128-bit registers.
#[inline]
pub fn not_records_128_in_place<R: Pod>(values: &mut [R]) -> Outcome {
    not_records_in_place(VectorWidth::V128, values)
}

/// [`not_records_in_place`] with 256-bit registers.
#[inline]
pub fn not_records_256_in_place<R: Pod>(values: &mut [R]) -> Outcome {
    not_records_in_place(VectorWidth::V256, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::is_supported;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    fn records<const N: usize>(count: usize) -> Vec<[u8; N]> {
        (0..count)
            .map(|r| core::array::from_fn(|b| (r * N + b) as u8 ^ 0x6D))
            .collect()
    }

    fn check_size<const N: usize>() {
        for width in VectorWidth::ALL {
            for count in [0, 1, 2, 5, 16, 33] {
                let origin = records::<N>(count);
                let mut target = vec![[0u8; N]; count];
                let outcome = not_records(width, &origin, &mut target);
                assert_eq!(outcome.is_performed(), is_supported(width));
                if !outcome.is_performed() {
                    assert!(target.iter().all(|r| *r == [0u8; N]));
                    continue;
                }

                let flat: &[u8] = bytemuck::cast_slice(&origin);
                let mut flat_target = vec![0u8; flat.len()];
                let flat_outcome = simd::transform::<u8>(BitOp::Not, width, flat, &mut flat_target, 0);
                assert!(flat_outcome.is_performed());
                assert_eq!(bytemuck::cast_slice::<[u8; N], u8>(&target), &flat_target[..]);

                for (o, t) in origin.iter().zip(target.iter()) {
                    for (a, b) in o.iter().zip(t.iter()) {
                        assert_eq!(*b, !*a);
                    }
                }
            }
        }
    }

    #[test]
    fn test_odd_record_sizes() {
        check_size::<3>();
        check_size::<5>();
        check_size::<6>();
        check_size::<7>();
        check_size::<9>();
        check_size::<13>();
        check_size::<31>();
    }

    #[test]
    fn test_in_place_roundtrip() {
        let origin = records::<11>(23);
        let mut values = origin.clone();
        if not_records_256_in_place(&mut values).is_performed() {
            assert_ne!(values, origin);
            assert!(not_records_256_in_place(&mut values).is_performed());
            assert_eq!(values, origin);
        }
        if not_records_128_in_place(&mut values).is_performed() {
            assert!(not_records_128_in_place(&mut values).is_performed());
            assert_eq!(values, origin);
        }
    }

    #[test]
    fn test_named_entries() {
        let origin = records::<3>(40);
        let mut a = vec![[0u8; 3]; 40];
        let mut b = vec![[0u8; 3]; 40];
        if not_records_128(&origin, &mut a).is_performed() && not_records_256(&origin, &mut b).is_performed() {
            assert_eq!(a, b);
        }
    }
}
