// crates/dial-core/src/dynamics/step.rs
//
// Pure pieces of one dial step. The engine composes these; tests exercise
// them directly.

use crate::command::Direction;
use crate::config::config::ReduceMode;
use crate::fixed::bounded14::Bounded14;
use crate::fixed::{fast_div, fast_mod, DIAL_SIZE};

/// Whole revolutions removed per block when folding a distance into 14 bits.
/// 100 * 127 + 99 stays below 2^14.
const WRAP_BLOCK_MASK: u32 = 0x7F;

/// Split a distance into (full wraps, sub-revolution step).
///
/// `full_wraps` always covers the whole 32-bit distance. The step follows
/// `mode`: `Full` yields exactly `distance % 100`, `LowBits` yields
/// `(distance & 0x3FFF) % 100`.
#[inline]
pub fn split_distance(distance: u32, mode: ReduceMode) -> (u32, u8) {
    let full_wraps = fast_div::divide(distance);
    let folded = match mode {
        ReduceMode::Full => fold_to_14_bits(distance, full_wraps),
        ReduceMode::LowBits => Bounded14::from_low_bits(distance),
    };
    (full_wraps, fast_mod::reduce(folded))
}

/// A 14-bit value congruent to `distance` mod 100.
///
/// Subtracts the wraps above the low 7 bits of the quotient, leaving
/// `distance % 100 + 100 * (full_wraps & 0x7F)`, at most 12799.
#[inline]
fn fold_to_14_bits(distance: u32, full_wraps: u32) -> Bounded14 {
    let stripped = (full_wraps & !WRAP_BLOCK_MASK) * DIAL_SIZE;
    let folded = distance - stripped;
    debug_assert!(folded <= Bounded14::MASK);
    Bounded14::from_low_bits(folded)
}

/// Does the final sub-revolution step reach or pass position 0?
///
/// Landing exactly on 0 counts. A zero-length step never crosses.
#[inline]
pub fn crosses_zero(position: u8, effective: u8, direction: Direction) -> bool {
    if effective == 0 {
        return false;
    }
    match direction {
        Direction::Right => u32::from(position) + u32::from(effective) >= DIAL_SIZE,
        Direction::Left => effective >= position,
    }
}

/// Zero passes contributed by one command.
///
/// Departing from 0 only counts completed revolutions; the starting zero is
/// never counted again.
#[inline]
pub fn zero_delta(position: u8, full_wraps: u32, crosses: bool) -> u32 {
    if position == 0 {
        full_wraps
    } else {
        full_wraps.wrapping_add(u32::from(crosses))
    }
}

/// Resting position after moving `effective` (< 100) steps.
#[inline]
pub fn next_position(position: u8, effective: u8, direction: Direction) -> u8 {
    debug_assert!(u32::from(effective) < DIAL_SIZE);
    let p = u32::from(position);
    let e = u32::from(effective);
    let mut next = match direction {
        Direction::Right => p + e,
        Direction::Left => p + DIAL_SIZE - e,
    };
    if next >= DIAL_SIZE {
        next -= DIAL_SIZE;
    }
    next as u8
}
