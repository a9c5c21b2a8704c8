use crate::config::config::DialConfig;
use crate::dynamics::state::DialState;
use crate::error::{DialError, Result};
use crate::fixed::DIAL_SIZE;

pub fn validate_config(c: &DialConfig) -> Result<()> {
    if u32::from(c.start) >= DIAL_SIZE {
        return Err(DialError::Validation(format!(
            "start position {} out of range (need 0..{})",
            c.start, DIAL_SIZE
        )));
    }
    Ok(())
}

pub fn validate_state(s: &DialState) -> Result<()> {
    if u32::from(s.position) >= DIAL_SIZE {
        return Err(DialError::Validation(format!(
            "position {} out of range (need 0..{})",
            s.position, DIAL_SIZE
        )));
    }
    Ok(())
}
