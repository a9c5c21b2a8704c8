// crates/dial-cli/src/cmd/gen.rs

use clap::Args;
use dial_core::generator::generate;

use crate::io::commands;

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Number of commands
    #[arg(long, default_value_t = 4_096)]
    pub count: usize,

    /// LCG seed
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Largest distance to emit (inclusive)
    #[arg(long, default_value_t = 1_000)]
    pub max_distance: u32,

    /// Output path. Writes to stdout when omitted.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    let rots = generate(args.seed, args.count, args.max_distance);
    match args.out.as_deref() {
        Some(path) => commands::write_commands_file(path, &rots),
        None => commands::write_commands_stdout(&rots),
    }
}
