//! Command processor - applies parsed commands to the transaction stack.

use tracing::trace;

use crate::command::{Command, Parser};
use crate::executor::error::{ExecuteError, ExecuteResult};
use crate::executor::result::CommandOutput;
use crate::transaction::TransactionStack;

/// Executes commands against an owned [`TransactionStack`].
///
/// Reads and writes always target the topmost level of the stack.
#[derive(Debug, Default)]
pub struct CommandProcessor {
    stack: TransactionStack,
}

impl CommandProcessor {
    /// Create a processor over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor over an existing stack.
    pub fn with_stack(stack: TransactionStack) -> Self {
        Self { stack }
    }

    /// Get a reference to the underlying stack.
    pub fn stack(&self) -> &TransactionStack {
        &self.stack
    }

    /// Consume the processor, returning its stack.
    pub fn into_stack(self) -> TransactionStack {
        self.stack
    }

    /// Parse and execute one line of input.
    pub fn process_line(&mut self, line: &str) -> ExecuteResult<CommandOutput> {
        let command = Parser::parse(line)?;
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> ExecuteResult<CommandOutput> {
        trace!(
            command = command.keyword().unwrap_or("<ignored>"),
            depth = self.stack.depth(),
            "executing"
        );

        match command {
            Command::Set { key, value } => {
                self.stack.current_mut().set(key, value);
                Ok(CommandOutput::Silent)
            }
            Command::Get { key } => {
                let value = self.stack.current().get(&key).unwrap_or_default();
                Ok(CommandOutput::value(value))
            }
            Command::Delete { key } => self.execute_delete(&key),
            Command::Count { value } => {
                let count = self.stack.current().count_value(&value);
                Ok(CommandOutput::value(count.to_string()))
            }
            Command::Begin => {
                self.stack.begin();
                Ok(CommandOutput::Silent)
            }
            Command::Commit => {
                self.stack.commit()?;
                Ok(CommandOutput::Silent)
            }
            Command::Rollback => {
                self.stack.rollback()?;
                Ok(CommandOutput::Silent)
            }
            Command::Help => Ok(CommandOutput::Help),
            Command::Ignored => Ok(CommandOutput::Silent),
        }
    }

    /// A key holding the empty string counts as not set and is left alone.
    fn execute_delete(&mut self, key: &str) -> ExecuteResult<CommandOutput> {
        let level = self.stack.current_mut();
        if !level.get(key).is_some_and(|value| !value.is_empty()) {
            return Err(ExecuteError::KeyNotSet);
        }
        level.remove(key);
        Ok(CommandOutput::Silent)
    }
}
