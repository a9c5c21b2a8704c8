// crates/dial-cli/src/io/commands.rs

use std::io::Read;

use anyhow::Context;
use dial_core::command::{format_commands, parse_commands};
use dial_core::Rotation;

/// Load a command file. `-` reads stdin.
pub fn load_commands(path: &str) -> anyhow::Result<Vec<Rotation>> {
    let text = if path == "-" {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read commands from stdin")?;
        s
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read commands: {path}"))?
    };
    let rots = parse_commands(&text).with_context(|| format!("parse commands: {path}"))?;
    tracing::debug!(path, commands = rots.len(), "commands loaded");
    Ok(rots)
}

pub fn write_commands_file(path: &str, rots: &[Rotation]) -> anyhow::Result<()> {
    std::fs::write(path, format_commands(rots))
        .with_context(|| format!("write commands: {path}"))?;
    Ok(())
}

pub fn write_commands_stdout(rots: &[Rotation]) -> anyhow::Result<()> {
    for r in rots {
        println!("{r}");
    }
    Ok(())
}
