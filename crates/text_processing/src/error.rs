//! Text processing errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Rule compilation failed: {0}")]
    RuleCompilation(String),

    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}

impl From<humanizer_core::Error> for TextProcessingError {
    fn from(err: humanizer_core::Error) -> Self {
        TextProcessingError::RuleCompilation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
