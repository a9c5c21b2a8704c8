// crates/dial-core/src/dynamics/mod.rs

pub mod engine;
pub mod state;
pub mod step;
