// crates/dial-core/src/fixed/fast_div.rs
//
// Exact floor(n / 100) for every u32 via one widening multiply.

use crate::fixed::DIAL_SIZE;

/// Right shift paired with [`MAGIC`]. The smallest shift exact over all of u32.
pub const SHIFT: u32 = 37;

/// ceil(2^37 / 100).
pub const MAGIC: u64 = 0x51EB_851F;

const _: () = assert!(magic_for(SHIFT) == MAGIC);

/// Rounded-up reciprocal of 100 scaled by 2^shift.
///
/// Only meaningful for `shift <= 38`; larger shifts overflow the u64 product.
pub const fn magic_for(shift: u32) -> u64 {
    let m = DIAL_SIZE as u64;
    ((1u64 << shift) + m - 1) / m
}

/// floor(n / 100).
#[inline]
pub fn divide(n: u32) -> u32 {
    ((u64::from(n) * MAGIC) >> SHIFT) as u32
}

/// Reciprocal division with an arbitrary shift. Used to probe which shifts are exact.
#[inline]
pub fn divide_with_shift(n: u32, shift: u32) -> u32 {
    ((u64::from(n) * magic_for(shift)) >> shift) as u32
}
