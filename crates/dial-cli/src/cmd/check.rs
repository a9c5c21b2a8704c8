// crates/dial-cli/src/cmd/check.rs

use clap::Args;
use dial_core::session::check_against_reference;
use dial_core::config::defaults::DEFAULT_START;
use dial_core::{DialConfig, ReduceMode};

use crate::io::commands;

/// Commands shown before a discrepancy.
const CONTEXT: usize = 3;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Command file. "-" reads stdin.
    #[arg(long = "in", default_value = "-")]
    pub input: String,

    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: u8,

    #[arg(long, default_value = "full", value_parser = ReduceMode::parse)]
    pub reduce: ReduceMode,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let rots = commands::load_commands(&args.input)?;
    let cfg = DialConfig {
        start: args.start,
        reduce_mode: args.reduce,
    };

    match check_against_reference(cfg, &rots)? {
        Ok(summary) => {
            println!(
                "ok commands={} position={} zero_count={}",
                summary.commands, summary.position, summary.zero_count
            );
            Ok(())
        }
        Err(d) => {
            let from = d.index.saturating_sub(CONTEXT);
            if from < d.index {
                eprintln!("previous commands:");
                for (j, r) in rots[from..d.index].iter().enumerate() {
                    eprintln!("  {}: {}", from + j + 1, r);
                }
            }
            tracing::error!(index = d.index, rotation = %d.rotation, "engine diverged from reference");
            anyhow::bail!("discrepancy at {d}")
        }
    }
}
