//! Command execution engine for layerkv.
//!
//! The [`CommandProcessor`] owns the transaction stack for the lifetime of
//! a session and maps each [`Command`](crate::command::Command) onto it.

mod error;
mod processor;
mod result;

pub use error::{ExecuteError, ExecuteResult};
pub use processor::CommandProcessor;
pub use result::CommandOutput;
