use std::fmt;

use tracing::trace;

use crate::error::{EditError, Result};

/// Buffer capacity used by [`Document::new`].
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Character occupying every position that has not been written.
pub const FILLER: char = ' ';

/// A fixed-capacity text buffer with a cursor ("dot").
///
/// Text is written in place: an insertion overwrites whatever occupies its
/// range and a deletion blanks its range with [`FILLER`]. Nothing ever shifts.
/// Alongside the dot, the document tracks `end`, the logical length of its
/// content; everything at or past `end` is filler.
///
/// Every mutation is checked against the buffer, and a deletion must name the
/// exact text it removes. Replaying an edit against a document whose state
/// has drifted therefore fails instead of corrupting it.
///
/// Positions and lengths count `char`s, not bytes.
pub struct Document {
    buffer: Vec<char>,
    dot: usize,
    end: usize,
}

impl Document {
    /// Create an empty document with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            buffer: vec![FILLER; DEFAULT_CAPACITY],
            dot: 0,
            end: 0,
        }
    }

    /// Create an empty document holding at most `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EditError::InvalidConfiguration(
                "document capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            buffer: vec![FILLER; capacity],
            dot: 0,
            end: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The current cursor position.
    pub const fn dot(&self) -> usize {
        self.dot
    }

    /// Logical length: one past the highest position holding content.
    pub const fn len(&self) -> usize {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Write `s` starting at `pos`, overwriting what is there.
    ///
    /// Writing past the current end leaves filler in the gap. The dot moves
    /// to the end of the written text.
    pub fn insert(&mut self, pos: usize, s: &str) -> Result<()> {
        let chars: Vec<char> = s.chars().collect();
        let stop = self.checked_span(pos, chars.len())?;

        self.buffer[pos..stop].copy_from_slice(&chars);
        self.dot = stop;
        self.end = self.end.max(stop);
        trace!(pos, len = chars.len(), end = self.end, "insert");
        Ok(())
    }

    /// Blank out `s` at `pos`.
    ///
    /// Fails with [`EditError::ContentMismatch`] unless the buffer holds
    /// exactly `s` at `pos`. When the deleted range reaches the logical end,
    /// the end retreats to `pos`. The dot lands on `pos`, clamped to the end.
    pub fn delete(&mut self, pos: usize, s: &str) -> Result<()> {
        let expected: Vec<char> = s.chars().collect();
        let stop = self.checked_span(pos, expected.len())?;

        let current = &self.buffer[pos..stop];
        if current != expected.as_slice() {
            return Err(EditError::ContentMismatch {
                pos,
                expected: s.to_string(),
                found: current.iter().collect(),
            });
        }

        self.buffer[pos..stop].fill(FILLER);
        if pos < self.end && stop >= self.end {
            self.end = pos;
        }
        self.dot = pos.min(self.end);
        trace!(pos, len = expected.len(), end = self.end, "delete");
        Ok(())
    }

    /// Move the dot. `pos` may not pass the logical end.
    pub fn set_dot(&mut self, pos: usize) -> Result<()> {
        if pos > self.end {
            return Err(EditError::OutOfBounds {
                pos,
                len: 0,
                limit: self.end,
            });
        }
        self.dot = pos;
        Ok(())
    }

    /// The logical content with trailing filler trimmed.
    ///
    /// Filler between pieces of content is kept, so text inserted past the
    /// end shows up padded.
    pub fn render(&self) -> String {
        let content = &self.buffer[..self.end];
        let visible = content
            .iter()
            .rposition(|&c| c != FILLER)
            .map_or(0, |last| last + 1);
        content[..visible].iter().collect()
    }

    /// Validate `[pos, pos + len)` against the capacity and return its end.
    fn checked_span(&self, pos: usize, len: usize) -> Result<usize> {
        pos.checked_add(len)
            .filter(|&stop| stop <= self.capacity())
            .ok_or(EditError::OutOfBounds {
                pos,
                len,
                limit: self.capacity(),
            })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("capacity", &self.capacity())
            .field("dot", &self.dot)
            .field("end", &self.end)
            .finish()
    }
}
