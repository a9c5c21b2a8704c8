// crates/dial-core/src/generator.rs

use crate::command::{Direction, Rotation};

/// Knuth MMIX LCG step. Deterministic, not crypto.
#[inline]
fn lcg_next(x: &mut u64) -> u64 {
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *x
}

/// Reproducible command stream with distances in `0..=max_distance`.
pub fn generate(seed: u64, count: usize, max_distance: u32) -> Vec<Rotation> {
    let mut x = seed;
    let span = u64::from(max_distance) + 1;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let r = lcg_next(&mut x);
        let direction = if (r >> 63) == 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        // High bits of an LCG are the well-mixed ones.
        let distance = ((r >> 16) % span) as u32;
        out.push(Rotation {
            direction,
            distance,
        });
    }
    out
}
