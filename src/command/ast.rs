//! Parsed command representation.

/// A single parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SET key value.
    Set { key: String, value: String },
    /// GET key.
    Get { key: String },
    /// DELETE key.
    Delete { key: String },
    /// COUNT value.
    Count { value: String },
    /// BEGIN.
    Begin,
    /// COMMIT.
    Commit,
    /// ROLLBACK.
    Rollback,
    /// Any line starting with `h`.
    Help,
    /// Unrecognized input, which is a no-op.
    Ignored,
}

impl Command {
    /// Keyword for logging; `None` for ignored lines.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Set { .. } => Some("SET"),
            Command::Get { .. } => Some("GET"),
            Command::Delete { .. } => Some("DELETE"),
            Command::Count { .. } => Some("COUNT"),
            Command::Begin => Some("BEGIN"),
            Command::Commit => Some("COMMIT"),
            Command::Rollback => Some("ROLLBACK"),
            Command::Help => Some("HELP"),
            Command::Ignored => None,
        }
    }
}
