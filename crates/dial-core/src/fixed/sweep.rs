// crates/dial-core/src/fixed/sweep.rs
//
// Self-checks for the reduction kernels against hardware `/` and `%`.

use crate::fixed::bounded14::Bounded14;
use crate::fixed::{fast_div, fast_mod, DIAL_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepReport {
    pub checked: u64,
    /// Largest correction count observed (fast_mod only).
    pub max_corrections: u8,
}

/// Every 14-bit input. Returns the first input that disagrees with `%`.
pub fn sweep_fast_mod() -> Result<SweepReport, u32> {
    let mut max_corrections = 0u8;
    for x in 0..=Bounded14::MASK {
        let (r, c) = fast_mod::reduce_traced(Bounded14::from_low_bits(x));
        if u32::from(r) != x % DIAL_SIZE || c > fast_mod::MAX_CORRECTIONS {
            return Err(x);
        }
        max_corrections = max_corrections.max(c);
    }
    Ok(SweepReport {
        checked: u64::from(Bounded14::MASK) + 1,
        max_corrections,
    })
}

/// `100k - 1`, `100k`, `100k + 1` for every k with `100k <= u32::MAX`, plus `u32::MAX`.
///
/// These are the only places a reciprocal quotient can be off by one.
pub fn sweep_fast_div_boundaries() -> Result<SweepReport, u32> {
    let mut checked = 0u64;
    let mut check = |n: u32| -> Result<(), u32> {
        checked += 1;
        if fast_div::divide(n) == n / DIAL_SIZE {
            Ok(())
        } else {
            Err(n)
        }
    };

    check(0)?;
    check(1)?;
    let k_max = u32::MAX / DIAL_SIZE;
    for k in 1..=k_max {
        let n = k * DIAL_SIZE;
        check(n - 1)?;
        check(n)?;
        if let Some(n1) = n.checked_add(1) {
            check(n1)?;
        }
    }
    check(u32::MAX)?;

    Ok(SweepReport {
        checked,
        max_corrections: 0,
    })
}
