//! Invertible edit descriptors.
//!
//! A [`Change`] records one insertion or deletion together with the dot
//! positions around it. It never holds on to a document: [`Change::apply`]
//! and [`Change::revert`] take the target explicitly and let the
//! [`Document`] decide whether the edit is still valid.

use std::fmt;

use crate::document::Document;
use crate::error::Result;

/// Which way a [`Change`] edits the document when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insertion,
    Deletion,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => f.write_str("Insertion"),
            Self::Deletion => f.write_str("Deletion"),
        }
    }
}

/// One reversible edit: `text` inserted at or deleted from `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    kind: ChangeKind,
    position: usize,
    text: String,
    cursor_before: usize,
    cursor_after: usize,
}

impl Change {
    fn new(
        kind: ChangeKind,
        position: usize,
        text: String,
        cursor_before: usize,
        cursor_after: usize,
    ) -> Self {
        Self {
            kind,
            position,
            text,
            cursor_before,
            cursor_after,
        }
    }

    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Dot restored by [`revert`](Self::revert).
    pub const fn cursor_before(&self) -> usize {
        self.cursor_before
    }

    /// Dot set by [`apply`](Self::apply).
    pub const fn cursor_after(&self) -> usize {
        self.cursor_after
    }

    /// Perform the edit on `doc`, then move the dot to `cursor_after`.
    pub fn apply(&self, doc: &mut Document) -> Result<()> {
        match self.kind {
            ChangeKind::Insertion => doc.insert(self.position, &self.text)?,
            ChangeKind::Deletion => doc.delete(self.position, &self.text)?,
        }
        doc.set_dot(self.cursor_after)
    }

    /// Undo the edit on `doc`, then move the dot back to `cursor_before`.
    pub fn revert(&self, doc: &mut Document) -> Result<()> {
        match self.kind {
            ChangeKind::Insertion => doc.delete(self.position, &self.text)?,
            ChangeKind::Deletion => doc.insert(self.position, &self.text)?,
        }
        doc.set_dot(self.cursor_before)
    }
}

/// Builds [`Change`] values. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeFactory;

impl ChangeFactory {
    pub const fn new() -> Self {
        Self
    }

    /// Describe inserting `s` at `pos`, moving the dot from `dot_before` to `dot_after`.
    pub fn create_insertion(
        &self,
        pos: usize,
        s: impl Into<String>,
        dot_before: usize,
        dot_after: usize,
    ) -> Change {
        Change::new(ChangeKind::Insertion, pos, s.into(), dot_before, dot_after)
    }

    /// Describe deleting `s` at `pos`, moving the dot from `dot_before` to `dot_after`.
    pub fn create_deletion(
        &self,
        pos: usize,
        s: impl Into<String>,
        dot_before: usize,
        dot_after: usize,
    ) -> Change {
        Change::new(ChangeKind::Deletion, pos, s.into(), dot_before, dot_after)
    }
}
