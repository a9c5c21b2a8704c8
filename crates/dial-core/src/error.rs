use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialError>;

#[derive(Debug, Error)]
pub enum DialError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid command: {0}")]
    Command(String),

    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },
}
