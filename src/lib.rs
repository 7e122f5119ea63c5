//! layerkv - an interactive key-value store with nested transactions
//!
//! State lives entirely in memory as a stack of snapshots. `BEGIN` pushes a
//! copy of the current state, `COMMIT` folds it back down and `ROLLBACK`
//! throws it away. Commands arrive one per line.
//!
//! # Example
//!
//! ```
//! use layerkv::executor::{CommandOutput, CommandProcessor};
//!
//! let mut kv = CommandProcessor::new();
//! kv.process_line("SET a 1").unwrap();
//! kv.process_line("BEGIN").unwrap();
//! kv.process_line("SET a 2").unwrap();
//! kv.process_line("ROLLBACK").unwrap();
//! assert_eq!(kv.process_line("GET a").unwrap(), CommandOutput::value("1"));
//! ```

pub mod command;
pub mod executor;
pub mod shell;
pub mod transaction;
