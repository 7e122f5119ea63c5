//! Line parser.
//!
//! Keywords are matched as literal, case-sensitive prefixes of the trimmed
//! line. Arguments are the whitespace-separated fields after the first one;
//! surplus fields are dropped.

use super::ast::Command;
use super::error::{ParseError, ParseResult};

const SET_USAGE: &str = "SET <key> <value>";
const GET_USAGE: &str = "GET <key>";
const DELETE_USAGE: &str = "DELETE <key>";
const COUNT_USAGE: &str = "COUNT <value>";

/// Command parser for layerkv.
pub struct Parser;

impl Parser {
    /// Parse one input line into a command.
    pub fn parse(line: &str) -> ParseResult<Command> {
        let line = line.trim();

        // Order matters: the first matching prefix wins.
        if line.starts_with('h') {
            return Ok(Command::Help);
        }
        if line.starts_with("SET") {
            let [key, value] = Self::args::<2>(line, SET_USAGE)?;
            return Ok(Command::Set { key, value });
        }
        if line.starts_with("GET") {
            let [key] = Self::args::<1>(line, GET_USAGE)?;
            return Ok(Command::Get { key });
        }
        if line.starts_with("DELETE") {
            let [key] = Self::args::<1>(line, DELETE_USAGE)?;
            return Ok(Command::Delete { key });
        }
        if line.starts_with("COUNT") {
            let [value] = Self::args::<1>(line, COUNT_USAGE)?;
            return Ok(Command::Count { value });
        }
        if line.starts_with("BEGIN") {
            return Ok(Command::Begin);
        }
        if line.starts_with("ROLLBACK") {
            return Ok(Command::Rollback);
        }
        if line.starts_with("COMMIT") {
            return Ok(Command::Commit);
        }

        Ok(Command::Ignored)
    }

    /// Take exactly `N` arguments following the keyword field.
    fn args<const N: usize>(line: &str, usage: &'static str) -> ParseResult<[String; N]> {
        let mut fields = line.split_whitespace().skip(1);
        let mut out: [String; N] = std::array::from_fn(|_| String::new());
        for slot in out.iter_mut() {
            *slot = fields
                .next()
                .ok_or_else(|| ParseError::too_few(usage))?
                .to_string();
        }
        Ok(out)
    }
}
