//! Line history with cursor-based recall.
//!
//! Append-only within a session: submissions push to the end and reset the
//! cursor past the newest entry (the "fresh line" position). Up/Down move
//! the cursor and hand back the line to repopulate the input with. Nothing
//! is persisted across sessions.

/// Submitted input lines plus a recall cursor in `[0, len]`.
///
/// A cursor equal to `len` means "past the newest entry", i.e. a fresh
/// input line.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor past the newest entry.
    ///
    /// Blank lines (empty after trimming) are not recorded. The line is
    /// stored verbatim, not normalized.
    pub fn submit(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Move the cursor one entry back and return that entry.
    ///
    /// At the oldest entry this is a no-op and returns `None` (the input
    /// line stays as it is).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Move the cursor one entry forward and return the line to show.
    ///
    /// Stepping past the newest entry yields `Some("")` (a fresh line).
    /// Already past the newest entry, this is a no-op and returns `None`.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        if self.cursor == self.entries.len() {
            Some("")
        } else {
            Some(&self.entries[self.cursor])
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position, for the input layer's bookkeeping.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
