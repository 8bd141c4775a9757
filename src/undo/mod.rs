//! Undo/redo history driven against a shared document.
//!
//! [`UndoManager`] moves [`Change`](crate::change::Change)s between two
//! bounded histories, reverting or reapplying each one on the way.
//! [`UndoManagerFactory`] binds managers to documents.

mod factory;
mod manager;

pub use factory::UndoManagerFactory;
pub use manager::UndoManager;
