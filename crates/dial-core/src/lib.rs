pub mod error;
pub mod validate;

pub mod command;
pub mod config;
pub mod dynamics;
pub mod fixed;
pub mod generator;
pub mod reference;
pub mod session;

pub use crate::command::{Direction, Rotation};
pub use crate::config::config::{DialConfig, ReduceMode};
pub use crate::dynamics::engine::{DialEngine, StepOutcome};
pub use crate::dynamics::state::DialState;
pub use crate::error::{DialError, Result};
