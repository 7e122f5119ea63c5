//! Transaction management for layerkv.
//!
//! Transactions are modelled as a stack of full snapshots of the store.
//! Each BEGIN copies the current top, writes only ever touch the top, and
//! COMMIT / ROLLBACK resolve the top against its parent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TransactionStack                          │
//! │        (owns every level, resolves BEGIN/COMMIT/ROLLBACK)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │   Level 0   │  ...  │  Level N-1  │       │   Level N   │
//!  │   (base)    │       │             │       │  (current)  │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use layerkv::transaction::TransactionStack;
//!
//! let mut stack = TransactionStack::new();
//! stack.current_mut().set("a", "1");
//!
//! stack.begin();
//! stack.current_mut().remove("a");
//! stack.commit().unwrap();
//!
//! assert_eq!(stack.current().get("a"), None);
//! ```

mod error;
mod level;
mod stack;

pub use error::{TransactionError, TransactionResult};
pub use level::Level;
pub use stack::TransactionStack;
