// crates/dial-cli/src/cmd/mod.rs

pub mod check;
pub mod gen;
pub mod run;
pub mod verify;
