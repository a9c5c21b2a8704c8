// crates/dial-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "dial-cli")]
#[command(about = "100-position dial simulator with division-free reduction", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). DIAL_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a command file to a dial and report the final state
    Run(cmd::run::RunArgs),

    /// Cross-check the engine against the division-based reference model
    Check(cmd::check::CheckArgs),

    /// Generate a deterministic command file
    Gen(cmd::gen::GenArgs),

    /// Sweep the /100 and %100 kernels against hardware division
    Verify(cmd::verify::VerifyArgs),
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("DIAL_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
    }
}
