//! Error types shared across the humanizer crates

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rule error: {0}")]
    Rule(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Rule(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
