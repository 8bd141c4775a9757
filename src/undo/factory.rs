use tracing::debug;

use crate::config::ConfigFlags;
use crate::document::SharedDocument;
use crate::error::{EditError, Result};

use super::UndoManager;

/// Builds [`UndoManager`]s. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndoManagerFactory;

impl UndoManagerFactory {
    pub const fn new() -> Self {
        Self
    }

    /// Bind a new manager to `document`, keeping up to `capacity` changes in
    /// each history. A capacity of zero is an [`EditError::InvalidConfiguration`].
    pub fn create(&self, document: SharedDocument, capacity: usize) -> Result<UndoManager> {
        debug!(capacity, "creating undo manager");
        UndoManager::new(document, capacity)
    }

    /// Like [`create`](Self::create), taking the capacity from loaded config.
    ///
    /// The history capacity has no default, so flags without one are rejected.
    pub fn create_from_flags(
        &self,
        document: SharedDocument,
        flags: &ConfigFlags,
    ) -> Result<UndoManager> {
        let capacity = flags.history_capacity.ok_or_else(|| {
            EditError::InvalidConfiguration("history capacity is not configured".to_string())
        })?;
        self.create(document, capacity)
    }
}
