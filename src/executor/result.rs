//! Command result types.

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Nothing to print.
    Silent,
    /// A value to print, possibly empty.
    Value(String),
    /// The command reference should be printed.
    Help,
}

impl CommandOutput {
    /// Create a value result.
    pub fn value(value: impl Into<String>) -> Self {
        CommandOutput::Value(value.into())
    }

    /// The printed value, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            CommandOutput::Value(v) => Some(v),
            _ => None,
        }
    }
}
