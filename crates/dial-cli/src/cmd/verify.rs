// crates/dial-cli/src/cmd/verify.rs

use clap::Args;
use dial_core::fixed::fast_mod;
use dial_core::fixed::sweep::{sweep_fast_div_boundaries, sweep_fast_mod};

use std::time::Instant;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Skip the /100 boundary sweep (about 129M checks)
    #[arg(long)]
    pub skip_div: bool,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let m = sweep_fast_mod()
        .map_err(|x| anyhow::anyhow!("fast_mod mismatch at x={x}"))?;
    println!(
        "fast_mod ok: checked={} max_corrections={} (mu={})",
        m.checked,
        m.max_corrections,
        fast_mod::MU
    );

    if !args.skip_div {
        let d = sweep_fast_div_boundaries()
            .map_err(|n| anyhow::anyhow!("fast_div mismatch at n={n}"))?;
        println!("fast_div ok: checked={}", d.checked);
    }

    eprintln!("elapsed_ms={}", t0.elapsed().as_millis());
    Ok(())
}
