//! Fixed-capacity text buffer with cursor tracking.
//!
//! The buffer never grows or shifts: edits overwrite in place and deletions
//! must name the exact text they remove.

mod buffer;

pub use buffer::{DEFAULT_CAPACITY, Document, FILLER};

use std::cell::RefCell;
use std::rc::Rc;

/// Handle through which a caller and an [`UndoManager`](crate::undo::UndoManager)
/// share one document.
pub type SharedDocument = Rc<RefCell<Document>>;

/// Wrap `document` in a [`SharedDocument`] handle.
pub fn shared(document: Document) -> SharedDocument {
    Rc::new(RefCell::new(document))
}
