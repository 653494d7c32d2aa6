//! 256-bit kernels (AVX2 on x86-64, via `Desktop64`).
//!
//! `wide::u64x4` only becomes a single AVX2 register when the whole crate is
//! compiled with `+avx2`; at the x86-64 baseline it is two SSE2 halves even
//! inside `#[arcane]`. The kernel therefore uses `__m256i` and the AVX2
//! intrinsics directly, with loads and stores from `safe_unaligned_simd`, all
//! inside the `#[arcane]` body.
//!
//! Other architectures have no 256-bit integer registers worth using, so
//! there [`transform`] and [`transform_in_place`] always report
//! [`Outcome::NotPerformed`].

use crate::element::Element;
use crate::op::{BitOp, Outcome};

#[cfg(target_arch = "x86_64")]
pub use x86::*;

#[cfg(target_arch = "x86_64")]
mod x86 {
    use core::arch::x86_64::{_mm256_and_si256, _mm256_or_si256, _mm256_set1_epi8, _mm256_xor_si256};

    use archmage::arcane;
    use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

    pub use archmage::Desktop64;

    use crate::element::Element;
    use crate::op::{BitOp, Outcome};
    use crate::rites::{gated, split_apply, split_apply_in_place};

    /// Token type proving 256-bit support.
    pub type Token = Desktop64;

    #[arcane]
    fn bitwise_v3(_token: Desktop64, op: BitOp, origin: &[u8], target: &mut [u8], pattern: [u8; 32]) {
        bitwise_lanes!(
            op, [origin, target], 32,
            load = _mm256_loadu_si256, store = _mm256_storeu_si256,
            and = _mm256_and_si256, or = _mm256_or_si256, xor = _mm256_xor_si256,
            mask = _mm256_loadu_si256(&pattern), ones = _mm256_set1_epi8(-1),
        );
    }

    #[arcane]
    fn bitwise_in_place_v3(_token: Desktop64, op: BitOp, values: &mut [u8], pattern: [u8; 32]) {
        bitwise_lanes!(
            op, [values], 32,
            load = _mm256_loadu_si256, store = _mm256_storeu_si256,
            and = _mm256_and_si256, or = _mm256_or_si256, xor = _mm256_xor_si256,
            mask = _mm256_loadu_si256(&pattern), ones = _mm256_set1_epi8(-1),
        );
    }

    /// Apply `op` from `origin` into `target` using 32-byte registers.
    ///
    /// Whole registers go through the AVX2 kernel; the trailing
    /// `len % lanes` elements go through [`crate::scalar::transform`].
    ///
    /// # Panics
    /// Panics if `origin.len() != target.len()`.
    pub fn transform_with<T: Element>(
        token: Desktop64,
        op: BitOp,
        origin: &[T],
        target: &mut [T],
        mask: T,
    ) {
        split_apply::<T, 32>(op, origin, target, mask, |op, origin, target, pattern| {
            bitwise_v3(token, op, origin, target, pattern)
        });
    }

    /// Apply `op` to `values` in place using 32-byte registers.
    pub fn transform_in_place_with<T: Element>(
        token: Desktop64,
        op: BitOp,
        values: &mut [T],
        mask: T,
    ) {
        split_apply_in_place::<T, 32>(op, values, mask, |op, values, pattern| {
            bitwise_in_place_v3(token, op, values, pattern)
        });
    }

    #[inline(always)]
    pub(super) fn transform_gated<T: Element>(
        token: Option<Desktop64>,
        op: BitOp,
        origin: &[T],
        target: &mut [T],
        mask: T,
    ) -> Outcome {
        gated(token, |token| transform_with(token, op, origin, target, mask))
    }

    #[inline(always)]
    pub(super) fn transform_in_place_gated<T: Element>(
        token: Option<Desktop64>,
        op: BitOp,
        values: &mut [T],
        mask: T,
    ) -> Outcome {
        gated(token, |token| transform_in_place_with(token, op, values, mask))
    }
}

/// Apply `op` with 256-bit registers if the CPU supports them.
///
/// On [`Outcome::NotPerformed`] the target has not been written.
///
/// # Panics
/// Panics if `origin.len() != target.len()`, before any capability check.
#[inline]
pub fn transform<T: Element>(op: BitOp, origin: &[T], target: &mut [T], mask: T) -> Outcome {
    assert_eq!(origin.len(), target.len());

    #[cfg(target_arch = "x86_64")]
    {
        use archmage::SimdToken;
        x86::transform_gated(Desktop64::try_new(), op, origin, target, mask)
    }

    #[cfg(not(target_arch = "x86_64"))]
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
        use archmage::SimdToken;
        x86::transform_in_place_gated(Desktop64::try_new(), op, values, mask)
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = (op, values, mask);
        Outcome::NotPerformed
    }
}

#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use super::*;
    use archmage::SimdToken;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    fn get_token() -> Option<Desktop64> {
        Desktop64::try_new()
    }

    #[test]
    fn test_u16_every_op_with_remainder() {
        let Some(token) = get_token() else {
            eprintln!("Skipping test: AVX2 not available");
            return;
        };

        // 16 lanes per register: two full registers plus 5 tail elements.
        let origin: Vec<u16> = (0..37u16).map(|i| i.wrapping_mul(0x9E37)).collect();
        let mask = u16::rescale_mask(0x3C);
        for op in BitOp::ALL {
            let mut got = vec![0u16; origin.len()];
            transform_with(token, op, &origin, &mut got, mask);
            for (i, (&x, &g)) in origin.iter().zip(got.iter()).enumerate() {
                assert_eq!(g, op.apply(x, mask), "{op} mismatch at {i}");
            }
        }
    }

    #[test]
    fn test_in_place_i64() {
        let Some(token) = get_token() else {
            eprintln!("Skipping test: AVX2 not available");
            return;
        };

        let origin: Vec<i64> = (-9..10).map(|i| i * 0x0101_0101_0101).collect();
        let mask = i64::rescale_mask(0xE1);
        for op in BitOp::ALL {
            let mut values = origin.clone();
            transform_in_place_with(token, op, &mut values, mask);
            for (i, (&x, &g)) in origin.iter().zip(values.iter()).enumerate() {
                assert_eq!(g, op.apply(x, mask), "{op} mismatch at {i}");
            }
        }
    }

    #[test]
    fn test_every_byte_of_a_register_is_transformed() {
        let Some(token) = get_token() else {
            eprintln!("Skipping test: AVX2 not available");
            return;
        };

        let origin: [u8; 32] = core::array::from_fn(|i| i as u8);
        for op in BitOp::ALL {
            let mut got = [0u8; 32];
            transform_with(token, op, &origin, &mut got, 0xC5);
            let expected: [u8; 32] = core::array::from_fn(|i| op.apply(origin[i], 0xC5));
            assert_eq!(got, expected, "{op}");
        }
    }

    #[test]
    fn test_gate_without_token_writes_nothing() {
        let origin: Vec<u32> = (0..45u32).map(|i| i.wrapping_mul(0x2545_F491)).collect();
        for op in BitOp::ALL {
            let mut target = vec![0xA5A5_A5A5u32; origin.len()];
            let outcome = x86::transform_gated(None, op, &origin, &mut target, u32::rescale_mask(0x0F));
            assert_eq!(outcome, Outcome::NotPerformed);
            assert_eq!(bytemuck::cast_slice::<u32, u8>(&target), &[0xA5u8; 45 * 4][..], "{op}");

            let mut values = origin.clone();
            let outcome = x86::transform_in_place_gated(None, op, &mut values, u32::rescale_mask(0x0F));
            assert_eq!(outcome, Outcome::NotPerformed);
            assert_eq!(values, origin, "{op} in place");
        }
    }

    #[test]
    fn test_detecting_entry_agrees_with_token() {
        let origin = [0xAAu8; 40];
        let mut target = [0u8; 40];
        let outcome = transform(BitOp::Not, &origin, &mut target, 0);
        if get_token().is_some() {
            assert_eq!(outcome, Outcome::Performed);
            assert_eq!(target, [0x55u8; 40]);
        } else {
            assert_eq!(outcome, Outcome::NotPerformed);
            assert_eq!(target, [0u8; 40]);
        }
    }
}
