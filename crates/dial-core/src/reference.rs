// crates/dial-core/src/reference.rs
//
// Division-based model of the dial: walk to the first zero, then count
// whole revolutions in what is left. Used to cross-check the engine.

use crate::command::{Direction, Rotation};
use crate::fixed::DIAL_SIZE;

/// Times position 0 is reached while performing `rot` from `position`.
pub fn count_zero_passes(position: u8, rot: Rotation) -> u32 {
    let distance = rot.distance;
    if distance == 0 {
        return 0;
    }
    let position = u32::from(position);
    if position == 0 {
        return distance / DIAL_SIZE;
    }

    let to_first_zero = match rot.direction {
        Direction::Right => DIAL_SIZE - position,
        Direction::Left => position,
    };
    if distance < to_first_zero {
        return 0;
    }
    1 + (distance - to_first_zero) / DIAL_SIZE
}

/// Resting position after `rot`.
pub fn next_position(position: u8, rot: Rotation) -> u8 {
    let p = u64::from(position);
    let m = u64::from(DIAL_SIZE);
    let d = u64::from(rot.distance) % m;
    let next = match rot.direction {
        Direction::Right => (p + d) % m,
        Direction::Left => (p + m - d) % m,
    };
    next as u8
}

/// Reference dial with the same two registers as the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceDial {
    pub position: u8,
    pub zero_count: u32,
}

impl ReferenceDial {
    pub fn new(start: u8) -> ReferenceDial {
        ReferenceDial {
            position: start,
            zero_count: 0,
        }
    }

    /// Returns the zero passes added by `rot`.
    pub fn apply(&mut self, rot: Rotation) -> u32 {
        let passes = count_zero_passes(self.position, rot);
        self.position = next_position(self.position, rot);
        self.zero_count = self.zero_count.wrapping_add(passes);
        passes
    }
}
