//! Front-end-agnostic key events.
//!
//! Every front end maps its native input to this enum. The console core
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event the console input layer reacts to.
///
/// Anything else (plain typing, backspace) is the front end's business:
/// the console only cares about the moments the input line is submitted,
/// recalled, or the screen is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    /// Submit the current input line and clear it.
    Enter,
    /// Recall the previous history entry into the input line.
    Up,
    /// Recall the next history entry (or a fresh empty line).
    Down,
    /// Clear the screen and re-emit the banner (Ctrl-L style shortcut).
    ClearScreen,
}
