// crates/dial-core/src/fixed/fast_mod.rs
//
// Barrett reduction mod 100 over 14-bit inputs.
//
//   q1 = x >> (k-1)
//   q2 = q1 * mu              mu = floor(2^(2k) / m)
//   q3 = q2 >> (k+1)          q3 <= floor(x / m) <= q3 + 2
//   r  = x - q3*m, then subtract m while r >= m (at most twice)
//
// With m = 100 and k = 7 the estimate never overshoots, so r starts
// non-negative, and the whole 14-bit domain needs at most two corrections.

use crate::fixed::bounded14::Bounded14;
use crate::fixed::DIAL_SIZE;

/// Bit width of the modulus.
pub const K: u32 = 7;

/// Fixed-point reciprocal of the modulus: floor(2^(2k) / 100) == 163.
pub const MU: u32 = (1 << (2 * K)) / DIAL_SIZE;

/// Upper bound on correction subtractions for any 14-bit input.
pub const MAX_CORRECTIONS: u8 = 2;

const _: () = assert!(DIAL_SIZE < (1 << K) && DIAL_SIZE >= (1 << (K - 1)));
const _: () = assert!(Bounded14::BITS == 2 * K);

/// `x % 100` without a divide.
#[inline]
pub fn reduce(x: Bounded14) -> u8 {
    reduce_traced(x).0
}

/// Like [`reduce`], also returning how many correction steps were applied.
#[inline]
pub fn reduce_traced(x: Bounded14) -> (u8, u8) {
    let x = u32::from(x.get());

    let q1 = x >> (K - 1);
    let q2 = q1 * MU;
    let q3 = q2 >> (K + 1);

    debug_assert!(q3 * DIAL_SIZE <= x);
    let mut r = x - q3 * DIAL_SIZE;

    let mut corrections = 0u8;
    if r >= DIAL_SIZE {
        r -= DIAL_SIZE;
        corrections += 1;
    }
    if r >= DIAL_SIZE {
        r -= DIAL_SIZE;
        corrections += 1;
    }

    (r as u8, corrections)
}
