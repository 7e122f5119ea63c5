//! The transaction stack - layered snapshots of the key-value state.
//!
//! Level 0 holds the committed state and always exists. Every BEGIN pushes
//! a full copy of the current top; COMMIT replaces the parent with the top
//! and ROLLBACK throws the top away.

use tracing::debug;

use crate::transaction::error::{TransactionError, TransactionResult};
use crate::transaction::level::Level;

/// An ordered stack of levels, never empty.
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    /// Level 0, the committed state.
    base: Level,
    /// Open transactions, innermost last.
    open: Vec<Level>,
}

impl TransactionStack {
    /// Create a stack holding a single empty base level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Check if at least one transaction is open.
    pub fn in_transaction(&self) -> bool {
        !self.open.is_empty()
    }

    /// The committed base level.
    pub fn base(&self) -> &Level {
        &self.base
    }

    /// The topmost level, which all reads observe.
    pub fn current(&self) -> &Level {
        self.open.last().unwrap_or(&self.base)
    }

    /// The topmost level, which all writes target.
    pub fn current_mut(&mut self) -> &mut Level {
        self.open.last_mut().unwrap_or(&mut self.base)
    }

    /// Open a nested transaction as a snapshot of the current level.
    pub fn begin(&mut self) {
        let snapshot = self.current().clone();
        self.open.push(snapshot);
        debug!(depth = self.depth(), "transaction begun");
    }

    /// Fold the innermost transaction into its parent.
    ///
    /// The parent is overwritten by the child as a whole, so keys the child
    /// deleted are gone from the parent afterwards.
    pub fn commit(&mut self) -> TransactionResult<()> {
        let top = self.open.pop().ok_or(TransactionError::NoTransaction)?;
        *self.current_mut() = top;
        debug!(depth = self.depth(), "transaction committed");
        Ok(())
    }

    /// Discard the innermost transaction and everything it wrote.
    pub fn rollback(&mut self) -> TransactionResult<()> {
        self.open.pop().ok_or(TransactionError::NoTransaction)?;
        debug!(depth = self.depth(), "transaction rolled back");
        Ok(())
    }
}
