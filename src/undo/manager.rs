use tracing::{debug, warn};

use crate::change::Change;
use crate::document::SharedDocument;
use crate::error::{EditError, Result};
use crate::stack::FixedCapacityStack;

/// Undo/redo history for one shared [`Document`](crate::document::Document).
///
/// The manager only tracks history. Callers apply a change themselves and
/// then hand it to [`register_change`](Self::register_change); the manager
/// touches the document only when undoing or redoing.
///
/// Both histories are [`FixedCapacityStack`]s of the same capacity, so old
/// entries are overwritten rather than kept forever. Registering a change
/// does not clear the redo history.
///
/// # Panics
///
/// [`undo`](Self::undo) and [`redo`](Self::redo) mutably borrow the shared
/// document, so they panic if the caller holds a borrow of it across the call.
#[derive(Debug)]
pub struct UndoManager {
    document: SharedDocument,
    undo_stack: FixedCapacityStack<Change>,
    redo_stack: FixedCapacityStack<Change>,
}

impl UndoManager {
    /// Create a manager for `document` keeping at most `capacity` changes in
    /// each history.
    pub fn new(document: SharedDocument, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EditError::InvalidConfiguration(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            document,
            undo_stack: FixedCapacityStack::new(capacity)?,
            redo_stack: FixedCapacityStack::new(capacity)?,
        })
    }

    /// The document this manager undoes and redoes against.
    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Maximum number of changes held by each history.
    pub fn capacity(&self) -> usize {
        self.undo_stack.capacity()
    }

    /// Record an already-applied change as the newest undo entry.
    pub fn register_change(&mut self, change: Change) {
        debug!(
            kind = %change.kind(),
            position = change.position(),
            "register change"
        );
        Self::push_logged(&mut self.undo_stack, change, "undo");
    }

    fn push_logged(stack: &mut FixedCapacityStack<Change>, change: Change, history: &str) {
        if let Some(evicted) = stack.push(change) {
            debug!(
                history,
                kind = %evicted.kind(),
                position = evicted.position(),
                "history full, dropped entry"
            );
        }
    }

    pub const fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub const fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub const fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub const fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// The change the next [`undo`](Self::undo) would revert.
    pub fn peek_undo(&self) -> Option<&Change> {
        self.undo_stack.peek()
    }

    /// The change the next [`redo`](Self::redo) would reapply.
    pub fn peek_redo(&self) -> Option<&Change> {
        self.redo_stack.peek()
    }

    /// Revert the newest undo entry and move it onto the redo history.
    ///
    /// If the document refuses the revert, the error is returned and the
    /// change is gone from both histories.
    pub fn undo(&mut self) -> Result<()> {
        if !self.can_undo() {
            return Err(EditError::NothingToUndo);
        }
        let change = self.undo_stack.pop()?;
        if let Err(err) = change.revert(&mut self.document.borrow_mut()) {
            warn!(
                kind = %change.kind(),
                position = change.position(),
                error = %err,
                "undo failed, history entry dropped"
            );
            return Err(err);
        }
        debug!(kind = %change.kind(), position = change.position(), "undo");
        Self::push_logged(&mut self.redo_stack, change, "redo");
        Ok(())
    }

    /// Reapply the newest redo entry and move it back onto the undo history.
    ///
    /// Failure drops the change, as with [`undo`](Self::undo).
    pub fn redo(&mut self) -> Result<()> {
        if !self.can_redo() {
            return Err(EditError::NothingToRedo);
        }
        let change = self.redo_stack.pop()?;
        if let Err(err) = change.apply(&mut self.document.borrow_mut()) {
            warn!(
                kind = %change.kind(),
                position = change.position(),
                error = %err,
                "redo failed, history entry dropped"
            );
            return Err(err);
        }
        debug!(kind = %change.kind(), position = change.position(), "redo");
        Self::push_logged(&mut self.undo_stack, change, "undo");
        Ok(())
    }

    /// Forget both histories. The document is left as it is.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
