// crates/dial-core/src/config/defaults.rs

use crate::config::config::{DialConfig, ReduceMode};

pub const DEFAULT_START: u8 = 50;

pub fn default_config() -> DialConfig {
    DialConfig {
        start: DEFAULT_START,
        reduce_mode: ReduceMode::Full,
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        default_config()
    }
}
