//! The console session: registry, history, and key handling.
//!
//! `Console` is the one object a front end owns. It routes key events to
//! history recall or dispatch; the concrete event source (keydown
//! listener, stdin loop, test harness) stays outside.

use prae_types::input::KeyEvent;

use crate::builtins::{banner, register_builtins};
use crate::history::HistoryBuffer;
use crate::interpreter::{CommandRegistry, Environment};
use crate::sink::Style;

/// A console session: dispatch plus line history.
///
/// History is appended here, by the input layer, never by the dispatcher.
pub struct Console {
    registry: CommandRegistry,
    history: HistoryBuffer,
}

impl Console {
    /// Create a session with the builtin commands registered.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self {
            registry,
            history: HistoryBuffer::new(),
        }
    }

    /// Dispatch one raw line without touching history.
    pub fn run(&mut self, line: &str, env: &mut Environment<'_>) {
        self.registry.execute(line, env);
    }

    /// Handle one key event against the current input value.
    ///
    /// Returns the next input value. Enter echoes the submitted line,
    /// records it, dispatches it, and clears the input; Up/Down recall
    /// history (leaving the input unchanged at either boundary); the
    /// clear-screen shortcut wipes the sink and re-emits the banner.
    pub fn handle_key(&mut self, key: KeyEvent, input: &str, env: &mut Environment<'_>) -> String {
        match key {
            KeyEvent::Enter => {
                let trimmed = input.trim();
                if !trimmed.is_empty() {
                    env.sink.emit(&format!("$ {trimmed}"), Style::Plain);
                    self.history.submit(input);
                    self.registry.execute(input, env);
                }
                String::new()
            }
            KeyEvent::Up => match self.history.recall_previous() {
                Some(line) => line.to_string(),
                None => input.to_string(),
            },
            KeyEvent::Down => match self.history.recall_next() {
                Some(line) => line.to_string(),
                None => input.to_string(),
            },
            KeyEvent::ClearScreen => {
                env.sink.clear();
                banner(&mut *env.sink);
                input.to_string()
            }
        }
    }

    /// The session's line history.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The session's command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
