//! Basic usage of bitlane transforms.

use bitlane::{BitOp, Outcome, VectorWidth, best_width, default, matrix, record, scalar};

fn main() {
    // What this CPU can do
    println!("=== Capabilities ===");
    for width in VectorWidth::ALL {
        println!("{:>3}-bit registers: {}", width.bits(), width.is_supported());
    }
    println!("widest: {:?}", best_width());

    // Named entry point with explicit fallback
    println!("\n=== AND 0x0B over u32 (128-bit) ===");
    let origin = [0xFFFF_FFFFu32, 0x1234_5678, 0, 0xDEAD_BEEF, 0x0F0F_0F0F, 0xB0B0_B0B0, 0x8000_0001];
    let mut target = [0u32; 7];
    match matrix::and_128(&origin, &mut target, 0x0B) {
        Outcome::Performed => println!("vector path ran"),
        Outcome::NotPerformed => {
            println!("no 128-bit support, running scalar");
            scalar::transform_byte_mask(BitOp::And, &origin, &mut target, 0x0B);
        }
    }
    for (x, t) in origin.iter().zip(target.iter()) {
        println!("  0x{x:08X} & 0x0B0B0B0B = 0x{t:08X}");
    }

    // Recommended API never needs a fallback
    println!("\n=== XNOR 0xF0 over i16 (default) ===");
    let mut values: Vec<i16> = (-4..4).collect();
    default::xnor_in_place(&mut values, 0xF0);
    println!("  {values:?}");

    // Odd-sized records
    println!("\n=== NOT over 5-byte records ===");
    let records: Vec<[u8; 5]> = (0..3u8).map(|i| [i, i + 1, i + 2, i + 3, i + 4]).collect();
    let mut flipped = vec![[0u8; 5]; records.len()];
    if record::not_records_256(&records, &mut flipped) == Outcome::NotPerformed {
        default::not_records(&records, &mut flipped);
    }
    for (r, f) in records.iter().zip(flipped.iter()) {
        println!("  {r:02X?} -> {f:02X?}");
    }
}
