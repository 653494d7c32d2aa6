//! Fixed-width integer element kinds accepted by the engine.
//!
//! [`Element`] is sealed: it is implemented for exactly the eight primitive
//! integer types `u8 i8 u16 i16 u32 i32 u64 i64`. Every entry point in the
//! crate is generic over it, so the compiler monomorphizes one kernel per
//! element type instead of the engine carrying a copy per type.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use bytemuck::Pod;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can flow through the bitwise engine.
///
/// The bound set is exactly what the scalar path needs; the vector path only
/// relies on [`Pod`] to view slices of elements as raw bytes.
pub trait Element:
    Pod
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + sealed::Sealed
{
    /// Bit width of the element.
    const BITS: u32;

    /// Byte width of the element.
    const BYTES: usize = (Self::BITS / 8) as usize;

    /// Replicate an 8-bit mask across every byte of the element.
    ///
    /// For a 32-bit element this is `m | m << 8 | m << 16 | m << 24`.
    fn rescale_mask(mask: u8) -> Self;

    /// The least significant byte of the value.
    fn low_byte(self) -> u8;
}

macro_rules! impl_element {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const BITS: u32 = <$u>::BITS;

            #[inline(always)]
            fn rescale_mask(mask: u8) -> Self {
                let byte = mask as $u;
                let mut acc: $u = 0;
                let mut shift = 0;
                while shift < <$u>::BITS {
                    acc |= byte << shift;
                    shift += 8;
                }
                acc as $t
            }

            #[inline(always)]
            fn low_byte(self) -> u8 {
                self as $u as u8
            }
        }
    )*};
}

impl_element! {
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
}
