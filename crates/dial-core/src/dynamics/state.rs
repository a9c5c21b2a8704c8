use crate::fixed::counter32::Counter32;

/// The two registers of a dial. Committed together on every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialState {
    /// Always in `0..100`.
    pub position: u8,
    pub zero_count: Counter32,
}

impl DialState {
    pub fn at(position: u8) -> DialState {
        DialState {
            position,
            zero_count: Counter32::ZERO,
        }
    }
}
