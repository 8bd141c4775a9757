// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. undo::UndoManager)
    clippy::module_name_repetitions
)]

//! # docundo
//!
//! Undo/redo tracking for edits made to a fixed-capacity text buffer.
//!
//! The pieces, leaf first:
//! - A bounded history stack that overwrites slot 0 when full
//! - A text buffer edited in place, with a cursor ("dot")
//! - Invertible insert/delete changes carrying the dot before and after
//! - A manager moving changes between an undo and a redo history
//!
//! ## Example
//!
//! ```
//! use docundo::prelude::*;
//!
//! let document = shared(Document::new());
//! let mut manager = UndoManagerFactory::new().create(document.clone(), 10)?;
//!
//! let change = ChangeFactory::new().create_insertion(0, "hello", 0, 5);
//! change.apply(&mut document.borrow_mut())?;
//! manager.register_change(change);
//!
//! manager.undo()?;
//! assert_eq!(document.borrow().render(), "");
//! manager.redo()?;
//! assert_eq!(document.borrow().render(), "hello");
//! # Ok::<(), docundo::EditError>(())
//! ```
//!
//! ## Modules
//!
//! - [`stack`]: Fixed-capacity history stack
//! - [`document`]: The text buffer
//! - [`change`]: Edit descriptors and their factory
//! - [`undo`]: The undo/redo manager and its factory
//! - [`config`]: Capacity defaults loaded from rc files
//! - [`logging`]: Tracing subscriber setup

pub mod change;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod stack;
pub mod undo;

pub use error::{EditError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::change::{Change, ChangeFactory, ChangeKind};
    pub use crate::document::{Document, SharedDocument, shared};
    pub use crate::error::{EditError, Result};
    pub use crate::undo::{UndoManager, UndoManagerFactory};
}
