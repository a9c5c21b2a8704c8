// crates/dial-cli/src/io/jsonl.rs

use anyhow::Context;
use dial_core::{Rotation, StepOutcome};

/// Per-command trace as JSONL.
/// Format: {"i":N,"dir":"L","distance":N,"wraps":N,"effective":N,"crosses":B,"delta":N,"position":N,"zero_count":N}
pub fn write_trace_file(
    path: &str,
    rots: &[Rotation],
    steps: &[StepOutcome],
    start_zero_count: u32,
) -> anyhow::Result<()> {
    let mut s = String::with_capacity(steps.len() * 128);
    let mut zero_count = start_zero_count;
    for (i, (rot, o)) in rots.iter().zip(steps).enumerate() {
        zero_count = zero_count.wrapping_add(o.delta);
        s.push_str(&format!(
            "{{\"i\":{},\"dir\":\"{}\",\"distance\":{},\"wraps\":{},\"effective\":{},\"crosses\":{},\"delta\":{},\"position\":{},\"zero_count\":{}}}\n",
            i,
            rot.direction.letter(),
            rot.distance,
            o.full_wraps,
            o.effective_distance,
            o.crosses,
            o.delta,
            o.position,
            zero_count
        ));
    }
    std::fs::write(path, s).with_context(|| format!("write trace jsonl: {path}"))?;
    Ok(())
}
