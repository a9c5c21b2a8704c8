// crates/dial-cli/src/cmd/run.rs

use clap::Args;
use dial_core::session::run_traced;
use dial_core::config::defaults::DEFAULT_START;
use dial_core::{DialConfig, DialEngine, ReduceMode};

use crate::io::{commands, jsonl};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command file, one "L68" / "R48" per line. "-" reads stdin.
    #[arg(long = "in", default_value = "-")]
    pub input: String,

    /// Starting position (0..=99)
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: u8,

    /// How the sub-revolution step is reduced
    #[arg(long, default_value = "full", value_parser = ReduceMode::parse)]
    pub reduce: ReduceMode,

    /// Write a per-command JSONL trace to this path
    #[arg(long)]
    pub trace: Option<String>,

    /// Print command/landing/wrap tallies to stderr
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let rots = commands::load_commands(&args.input)?;

    let cfg = DialConfig {
        start: args.start,
        reduce_mode: args.reduce,
    };
    let mut engine = DialEngine::new(cfg)?;
    let start_zero_count = engine.zero_count();

    let (summary, steps) = run_traced(&mut engine, &rots);

    if let Some(path) = args.trace.as_deref() {
        jsonl::write_trace_file(path, &rots, &steps, start_zero_count)?;
    }

    println!(
        "position={} zero_count={}",
        summary.position, summary.zero_count
    );

    if args.stats {
        eprintln!("--- run stats ---");
        eprintln!("reduce_mode = {}", cfg.reduce_mode.as_str());
        eprintln!("start       = {}", cfg.start);
        eprintln!("commands    = {}", summary.commands);
        eprintln!("landings    = {}", summary.landings);
        eprintln!("full_wraps  = {}", summary.full_wraps);
        eprintln!("zero_count  = {}", summary.zero_count);
    }

    Ok(())
}
