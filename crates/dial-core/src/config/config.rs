// crates/dial-core/src/config/config.rs

use crate::error::{DialError, Result};

/// How the sub-revolution step is derived from a 32-bit distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReduceMode {
    /// Reduce the whole distance: the step is exactly `distance % 100`.
    #[default]
    Full,
    /// Reduce only `distance & 0x3FFF`, matching the reference hardware.
    /// Diverges from `Full` once the distance reaches 2^14.
    LowBits,
}

impl ReduceMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ReduceMode::Full),
            "low-bits" | "lowbits" | "low14" => Ok(ReduceMode::LowBits),
            _ => Err(DialError::Validation(format!("unknown reduce mode: {s}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReduceMode::Full => "full",
            ReduceMode::LowBits => "low-bits",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialConfig {
    /// Resting position at construction and after `reset`. Must be < 100.
    pub start: u8,
    pub reduce_mode: ReduceMode,
}
