//! Vector kernels, one module per register width.
//!
//! Each width module exposes `transform_with` / `transform_in_place_with`,
//! which take an archmage token as proof the CPU supports the width, and
//! `transform` / `transform_in_place`, which obtain the proof themselves and
//! report [`Outcome::NotPerformed`] when they cannot.
//!
//! Register operations must be compiled with the target features the token
//! proves. `wide` picks its backend from compile-time features, so it is only
//! used where the backend it picks is already the one the width needs
//! (SSE2 / NEON / SIMD128 at 128 bits). The 256-bit kernel expands
//! `bitwise_lanes!` with AVX2 intrinsics directly inside its `#[arcane]`
//! body.
//!
//! # Modules
//!
//! - [`v128`] - 16-byte registers (SSE2 baseline or `X64V2Token` on x86-64,
//!   `Arm64` on AArch64, `Simd128Token` on wasm32)
//! - [`v256`] - 32-byte registers (`Desktop64` on x86-64)

#![cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "wasm32")),
    allow(dead_code, unused_imports)
)]

use crate::element::Element;
use crate::mask::broadcast;
use crate::op::{BitOp, Outcome};
use crate::scalar;

/// Apply an operator over whole `$bytes`-byte registers.
///
/// Expands in place, so every register operation is compiled with the target
/// features of the enclosing function. `load` / `store` move one register
/// between a `[u8; $bytes]` and the register type; `and`, `or` and `xor` are
/// the register operations. Negated operators are the base operator XOR
/// `ones`.
///
/// Buffers are `[origin, target]` or `[values]`; their lengths are whole
/// multiples of `$bytes`.
macro_rules! bitwise_lanes {
    (
        $op:expr, [$($buf:expr),+], $bytes:literal,
        load = $load:path, store = $store:path,
        and = $and:path, or = $or:path, xor = $xor:path,
        mask = $mask:expr, ones = $ones:expr $(,)?
    ) => {{
        let mask = $mask;
        let ones = $ones;
        match $op {
            $crate::op::BitOp::And => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $and(v, mask))
            }
            $crate::op::BitOp::Or => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $or(v, mask))
            }
            $crate::op::BitOp::Xor => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $xor(v, mask))
            }
            $crate::op::BitOp::Nand => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $xor($and(v, mask), ones))
            }
            $crate::op::BitOp::Nor => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $xor($or(v, mask), ones))
            }
            $crate::op::BitOp::Xnor => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $xor($xor(v, mask), ones))
            }
            $crate::op::BitOp::Not => {
                bitwise_lanes!(@each $bytes, $load, $store, [$($buf),+], |v| $xor(v, ones))
            }
        }
    }};
    (@each $bytes:literal, $load:path, $store:path, [$origin:expr, $target:expr], |$v:ident| $body:expr) => {
        for (src, dst) in bytemuck::cast_slice::<u8, [u8; $bytes]>($origin)
            .iter()
            .zip(bytemuck::cast_slice_mut::<u8, [u8; $bytes]>($target).iter_mut())
        {
            let $v = $load(src);
            $store(dst, $body);
        }
    };
    (@each $bytes:literal, $load:path, $store:path, [$values:expr], |$v:ident| $body:expr) => {
        for chunk in bytemuck::cast_slice_mut::<u8, [u8; $bytes]>($values).iter_mut() {
            let $v = $load(&*chunk);
            $store(chunk, $body);
        }
    };
}

pub mod v128;
pub mod v256;

/// Number of leading elements that fill whole `register_bytes` registers.
#[inline(always)]
pub(crate) fn bulk_len<T: Element>(len: usize, register_bytes: usize) -> usize {
    let lanes = register_bytes / T::BYTES;
    len - len % lanes
}

/// Run `kernel` over the whole registers of `origin` and finish the tail
/// with [`scalar::transform`].
///
/// # Panics
/// Panics if `origin.len() != target.len()`.
#[inline(always)]
pub(crate) fn split_apply<T: Element, const N: usize>(
    op: BitOp,
    origin: &[T],
    target: &mut [T],
    mask: T,
    kernel: impl FnOnce(BitOp, &[u8], &mut [u8], [u8; N]),
) {
    assert_eq!(origin.len(), target.len());
    let split = bulk_len::<T>(origin.len(), N);
    let (origin_bulk, origin_tail) = origin.split_at(split);
    let (target_bulk, target_tail) = target.split_at_mut(split);

    kernel(
        op,
        bytemuck::cast_slice(origin_bulk),
        bytemuck::cast_slice_mut(target_bulk),
        broadcast::<T, N>(mask),
    );
    scalar::transform(op, origin_tail, target_tail, mask);
}

/// In-place variant of [`split_apply`].
#[inline(always)]
pub(crate) fn split_apply_in_place<T: Element, const N: usize>(
    op: BitOp,
    values: &mut [T],
    mask: T,
    kernel: impl FnOnce(BitOp, &mut [u8], [u8; N]),
) {
    let split = bulk_len::<T>(values.len(), N);
    let (bulk, tail) = values.split_at_mut(split);

    kernel(op, bytemuck::cast_slice_mut(bulk), broadcast::<T, N>(mask));
    scalar::transform_in_place(op, tail, mask);
}

/// Run `kernel` only with proof of capability; without it nothing is written.
#[inline(always)]
pub(crate) fn gated<K>(proof: Option<K>, kernel: impl FnOnce(K)) -> Outcome {
    match proof {
        Some(proof) => {
            kernel(proof);
            Outcome::Performed
        }
        None => Outcome::NotPerformed,
    }
}
