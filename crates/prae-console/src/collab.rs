//! Navigation and clipboard collaborators.
//!
//! Both are side-effect-only interfaces the console consumes. Navigation
//! is terminal: once triggered there is nothing to wait for. Clipboard
//! writes are fire-and-forget: a write may complete synchronously or
//! report completion later over a channel, which the host drains with
//! [`poll_copies`] once per loop iteration.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::sink::{OutputSink, Style};

/// Navigates the current view to a URL.
///
/// Whether that is a same-page redirect, a new window, or a spawned
/// browser is the front end's choice, not a core contract.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Outcome of starting a clipboard write.
#[derive(Debug)]
pub enum ClipboardWrite {
    /// The write completed synchronously; `true` means success.
    Done(bool),
    /// The write completes later; the channel yields success or failure.
    Pending(Receiver<bool>),
}

/// Writes text to a system clipboard, possibly asynchronously.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> ClipboardWrite;
}

/// A clipboard write still waiting for its completion.
#[derive(Debug)]
pub struct PendingCopy {
    pub url: String,
    pub rx: Receiver<bool>,
}

/// Drain completed clipboard writes, emitting their outcome lines.
///
/// Success emits an ok-styled `copied` line; failure falls back to the raw
/// URL as a muted line. A write whose sender vanished without answering is
/// dropped silently: an unfired continuation leaves no output, never an
/// error state. Writes that are still in flight are retained.
pub fn poll_copies(pending: &mut Vec<PendingCopy>, sink: &mut dyn OutputSink) {
    let mut i = 0;
    while i < pending.len() {
        match pending[i].rx.try_recv() {
            Ok(true) => {
                sink.emit("copied", Style::Ok);
                pending.remove(i);
            }
            Ok(false) => {
                let copy = pending.remove(i);
                sink.emit(&copy.url, Style::Muted);
            }
            Err(TryRecvError::Disconnected) => {
                log::warn!("clipboard write abandoned without completion");
                pending.remove(i);
            }
            Err(TryRecvError::Empty) => {
                i += 1;
            }
        }
    }
}
