//! Command parsing errors.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Too few arguments - {usage}")]
    TooFewArguments { usage: &'static str },
}

impl ParseError {
    pub(crate) fn too_few(usage: &'static str) -> Self {
        ParseError::TooFewArguments { usage }
    }
}
