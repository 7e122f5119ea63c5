//! Command parsing for layerkv.
//!
//! Turns one line of input into a [`Command`], validating arity once up
//! front so execution never has to look at raw text again.

mod ast;
mod error;
mod parser;

pub use ast::Command;
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
