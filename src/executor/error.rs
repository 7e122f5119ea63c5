//! Command execution errors.

use thiserror::Error;

use crate::command::ParseError;
use crate::transaction::TransactionError;

/// Result type for command execution.
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Command execution errors.
///
/// Every variant is recoverable: it is reported to the user and the store
/// is left exactly as it was before the command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error("key not set")]
    KeyNotSet,
}
