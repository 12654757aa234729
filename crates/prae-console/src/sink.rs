//! The output sink: the append-only rendering target for console lines.
//!
//! The core only ever appends styled lines and (for `clear`) wipes the
//! sink; it never reads rendered content back. Concrete sinks live in the
//! front ends; `RecordingSink` is the in-memory double used in tests and
//! available to embedders.

/// Rendering style of one emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Plain,
    Muted,
    Warn,
    Err,
    Ok,
}

/// Append-only rendering target.
///
/// Implementations must neutralize any markup- or control-significant
/// characters in `text` so emitted content cannot alter the surrounding
/// structure.
pub trait OutputSink {
    /// Append one rendered line.
    fn emit(&mut self, text: &str, style: Style);

    /// Remove all previously emitted content.
    fn clear(&mut self);
}

/// In-memory sink that records emitted lines.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Vec<(String, Style)>,
    clears: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted since the last clear, in order.
    pub fn lines(&self) -> &[(String, Style)] {
        &self.lines
    }

    /// Number of times `clear` was called.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, text: &str, style: Style) {
        self.lines.push((text.to_string(), style));
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }
}
