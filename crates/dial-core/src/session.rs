// crates/dial-core/src/session.rs
//
// Drive an engine through a command sequence and summarize the result.

use std::fmt;

use crate::command::Rotation;
use crate::config::config::DialConfig;
use crate::dynamics::engine::{DialEngine, StepOutcome};
use crate::error::Result;
use crate::reference::ReferenceDial;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: u64,
    /// Final resting position.
    pub position: u8,
    /// Final zero-pass counter (wrapping).
    pub zero_count: u32,
    /// Commands that came to rest exactly on 0.
    pub landings: u64,
    /// Sum of full revolutions across all commands, not wrapped.
    pub full_wraps: u64,
}

pub fn run(engine: &mut DialEngine, rots: &[Rotation]) -> RunSummary {
    let mut s = RunSummary::default();
    for &rot in rots {
        let out = engine.apply(rot);
        tally(&mut s, &out);
    }
    finish(s, engine)
}

/// Like [`run`], keeping every step outcome.
pub fn run_traced(engine: &mut DialEngine, rots: &[Rotation]) -> (RunSummary, Vec<StepOutcome>) {
    let mut s = RunSummary::default();
    let mut steps = Vec::with_capacity(rots.len());
    for &rot in rots {
        let out = engine.apply(rot);
        tally(&mut s, &out);
        steps.push(out);
    }
    (finish(s, engine), steps)
}

fn tally(s: &mut RunSummary, out: &StepOutcome) {
    s.commands += 1;
    s.full_wraps += u64::from(out.full_wraps);
    if out.position == 0 {
        s.landings += 1;
    }
}

fn finish(mut s: RunSummary, engine: &DialEngine) -> RunSummary {
    s.position = engine.position();
    s.zero_count = engine.zero_count();
    s
}

/// First point where the engine and the reference model disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrepancy {
    /// 0-based command index.
    pub index: usize,
    pub rotation: Rotation,
    pub from_position: u8,
    pub engine_position: u8,
    pub engine_zero_count: u32,
    pub reference_position: u8,
    pub reference_zero_count: u32,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "command {} ({} from {}): engine position={} zeros={}, reference position={} zeros={}",
            self.index + 1,
            self.rotation,
            self.from_position,
            self.engine_position,
            self.engine_zero_count,
            self.reference_position,
            self.reference_zero_count
        )
    }
}

/// Step a fresh engine and a reference dial in lockstep.
///
/// Outer error: bad config. Inner error: the first disagreement.
pub fn check_against_reference(
    config: DialConfig,
    rots: &[Rotation],
) -> Result<std::result::Result<RunSummary, Discrepancy>> {
    let mut engine = DialEngine::new(config)?;
    let mut reference = ReferenceDial::new(config.start);
    let mut s = RunSummary::default();

    for (index, &rot) in rots.iter().enumerate() {
        let from_position = engine.position();
        let out = engine.apply(rot);
        reference.apply(rot);
        tally(&mut s, &out);

        if engine.position() != reference.position || engine.zero_count() != reference.zero_count {
            return Ok(Err(Discrepancy {
                index,
                rotation: rot,
                from_position,
                engine_position: engine.position(),
                engine_zero_count: engine.zero_count(),
                reference_position: reference.position,
                reference_zero_count: reference.zero_count,
            }));
        }
    }

    Ok(Ok(finish(s, &engine)))
}
