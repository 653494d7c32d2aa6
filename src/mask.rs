//! Mask broadcasting from a single element to a full register lane.
//!
//! The per-element half of broadcasting lives on [`Element::rescale_mask`];
//! this module tiles that element across the bytes of one SIMD register so
//! the kernel can load it once and reuse it for every lane.

use crate::element::Element;

/// Tile `unit` across an `N`-byte register image.
///
/// The element's native-endian bytes are written once per element slot, so
/// loading the result into a register puts `unit` in every lane regardless
/// of how the register's own lane type is declared.
///
/// `N` must be a multiple of `T::BYTES`; the kernels only use 16 and 32.
#[inline(always)]
pub fn broadcast<T: Element, const N: usize>(unit: T) -> [u8; N] {
    debug_assert_eq!(N % T::BYTES, 0);
    let unit_bytes = bytemuck::bytes_of(&unit);
    let mut lane = [0u8; N];
    for slot in lane.chunks_exact_mut(T::BYTES) {
        slot.copy_from_slice(unit_bytes);
    }
    lane
}

/// Rescale an 8-bit mask to `T` and tile it across an `N`-byte register.
#[inline(always)]
pub fn broadcast_byte<T: Element, const N: usize>(mask: u8) -> [u8; N] {
    broadcast::<T, N>(T::rescale_mask(mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_mask_fills_every_byte() {
        let lane: [u8; 16] = broadcast_byte::<u32, 16>(0x0B);
        assert_eq!(lane, [0x0B; 16]);
        let lane: [u8; 32] = broadcast_byte::<i64, 32>(0xF0);
        assert_eq!(lane, [0xF0; 32]);
    }

    #[test]
    fn test_wide_unit_repeats_per_slot() {
        let lane: [u8; 16] = broadcast::<u32, 16>(0x0403_0201);
        let words: [u32; 4] = bytemuck::cast(lane);
        assert_eq!(words, [0x0403_0201; 4]);

        let lane: [u8; 32] = broadcast::<i16, 32>(-2);
        let halves: [i16; 16] = bytemuck::cast(lane);
        assert_eq!(halves, [-2; 16]);
    }

    #[test]
    fn test_broadcast_is_idempotent() {
        for mask in 0..=255u8 {
            assert_eq!(
                broadcast_byte::<u16, 16>(mask),
                broadcast_byte::<u16, 16>(mask)
            );
        }
    }
}
