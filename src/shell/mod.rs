//! Line-oriented shell around the command processor.
//!
//! Reads commands one line at a time, prints `=> <text>` for values and
//! errors, and stops only at end of input.

mod error;
mod repl;

pub use error::{ShellError, ShellResult};
pub use repl::{Repl, ReplConfig};
