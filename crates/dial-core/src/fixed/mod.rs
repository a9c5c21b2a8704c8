// crates/dial-core/src/fixed/mod.rs
//
// Fixed-width arithmetic for the dial: bounded reduction inputs, the wrapping
// zero counter, and the division-free /100 and %100 kernels.

pub mod bounded14;
pub mod counter32;
pub mod fast_div;
pub mod fast_mod;
pub mod sweep;

/// Number of positions on the dial. Every reduction constant derives from this.
pub const DIAL_SIZE: u32 = 100;
