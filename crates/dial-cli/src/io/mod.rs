// crates/dial-cli/src/io/mod.rs

pub mod commands;
pub mod jsonl;
