// crates/dial-core/src/dynamics/engine.rs

use tracing::{debug, trace};

use crate::command::Rotation;
use crate::config::config::{DialConfig, ReduceMode};
use crate::dynamics::state::DialState;
use crate::dynamics::step;
use crate::error::Result;
use crate::validate::{validate_config, validate_state};

/// What one `apply` did. Purely informational; the engine state is already committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub full_wraps: u32,
    pub effective_distance: u8,
    pub crosses: bool,
    /// Zero passes added by this command (before the counter wraps).
    pub delta: u32,
    /// Position after the command.
    pub position: u8,
}

/// A 100-position dial with a wrapping count of zero passes.
///
/// Not internally synchronized: one owner drives it, and `apply` never
/// exposes a half-updated state.
#[derive(Clone, Debug)]
pub struct DialEngine {
    config: DialConfig,
    state: DialState,
}

impl DialEngine {
    pub fn new(config: DialConfig) -> Result<Self> {
        validate_config(&config)?;
        debug!(
            start = config.start,
            reduce = config.reduce_mode.as_str(),
            "dial engine created"
        );
        Ok(Self {
            state: DialState::at(config.start),
            config,
        })
    }

    pub fn reduce_mode(&self) -> ReduceMode {
        self.config.reduce_mode
    }

    #[inline]
    pub fn position(&self) -> u8 {
        self.state.position
    }

    #[inline]
    pub fn zero_count(&self) -> u32 {
        self.state.zero_count.get()
    }

    /// Apply one rotation command.
    pub fn apply(&mut self, rot: Rotation) -> StepOutcome {
        let position = self.state.position;
        let (full_wraps, effective) = step::split_distance(rot.distance, self.config.reduce_mode);
        let crosses = step::crosses_zero(position, effective, rot.direction);
        let delta = step::zero_delta(position, full_wraps, crosses);
        let next = step::next_position(position, effective, rot.direction);

        self.state = DialState {
            position: next,
            zero_count: self.state.zero_count.wrapping_add(delta),
        };

        trace!(
            rotation = %rot,
            from = position,
            to = next,
            full_wraps,
            effective,
            crosses,
            delta,
            zero_count = self.state.zero_count.get(),
            "dial step"
        );

        StepOutcome {
            full_wraps,
            effective_distance: effective,
            crosses,
            delta,
            position: next,
        }
    }

    /// Back to the configured start position with a cleared counter.
    pub fn reset(&mut self) {
        debug!(start = self.config.start, "dial engine reset");
        self.state = DialState::at(self.config.start);
    }

    pub fn snapshot(&self) -> DialState {
        self.state
    }

    /// Replace both registers at once. Rejects an out-of-range position.
    pub fn restore(&mut self, state: DialState) -> Result<()> {
        validate_state(&state)?;
        debug!(
            position = state.position,
            zero_count = state.zero_count.get(),
            "dial engine restored"
        );
        self.state = state;
        Ok(())
    }
}

impl Default for DialEngine {
    fn default() -> Self {
        let config = DialConfig::default();
        Self {
            state: DialState::at(config.start),
            config,
        }
    }
}
