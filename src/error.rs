//! Error types for buffer edits and history operations.

use thiserror::Error;

/// Everything that can go wrong while editing a [`Document`](crate::document::Document)
/// or moving changes through an [`UndoManager`](crate::undo::UndoManager).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A position or span falls outside the buffer capacity or its logical extent.
    #[error("position {pos} with length {len} is out of bounds (limit {limit})")]
    OutOfBounds { pos: usize, len: usize, limit: usize },

    /// The text at the target position differs from the text being deleted.
    #[error("content mismatch at {pos}: expected {expected:?}, found {found:?}")]
    ContentMismatch {
        pos: usize,
        expected: String,
        found: String,
    },

    /// Pop on a stack with no elements.
    #[error("stack is empty")]
    EmptyStack,

    /// Undo requested with an empty undo history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo history.
    #[error("nothing to redo")]
    NothingToRedo,

    /// A capacity or other construction parameter was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, EditError>;
