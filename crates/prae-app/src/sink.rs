//! ANSI terminal output sink.

use std::io::Write;

use prae_console::{OutputSink, Style};

/// Renders console lines to a terminal, one color per style.
pub struct AnsiSink<W: Write> {
    out: W,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn color(style: Style) -> Option<&'static str> {
    match style {
        Style::Plain => None,
        Style::Muted => Some("90"),
        Style::Warn => Some("33"),
        Style::Err => Some("31"),
        Style::Ok => Some("32"),
    }
}

/// Strip control characters so emitted text cannot smuggle its own escape
/// sequences into the terminal.
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

impl<W: Write> OutputSink for AnsiSink<W> {
    fn emit(&mut self, text: &str, style: Style) {
        let clean = sanitize(text);
        let _ = match color(style) {
            Some(code) => writeln!(self.out, "\x1b[{code}m{clean}\x1b[0m"),
            None => writeln!(self.out, "{clean}"),
        };
        let _ = self.out.flush();
    }

    fn clear(&mut self) {
        // Clear screen, then home the cursor.
        let _ = write!(self.out, "\x1b[2J\x1b[H");
        let _ = self.out.flush();
    }
}
