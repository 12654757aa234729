//! Command interpreter core for Prae.
//!
//! The console is a registry-based dispatch system in front of a read-only
//! link directory. Commands implement the `Command` trait and are
//! registered by name; the interpreter parses input lines, resolves
//! aliases, and dispatches `execute()`. Line history and key handling live
//! in the `Console` session wrapper, outside the dispatcher, and all
//! rendering goes through the `OutputSink` trait so the core never touches
//! a concrete UI.

mod builtins;
mod collab;
mod console;
mod directory;
mod history;
mod interpreter;
mod sink;

/// Startup banner line, re-emitted after every clear.
pub use builtins::BANNER;
/// Emit the startup banner to a sink.
pub use builtins::banner;
/// Register the builtin commands (repos, open, copy, clear) into a registry.
pub use builtins::register_builtins;
/// Writes text to a system clipboard, possibly asynchronously.
pub use collab::Clipboard;
/// Outcome of starting a clipboard write.
pub use collab::ClipboardWrite;
/// Navigates the current view to a URL.
pub use collab::Navigator;
/// A clipboard write still waiting for its completion.
pub use collab::PendingCopy;
/// Drain completed clipboard writes, emitting their outcome lines.
pub use collab::poll_copies;
/// A console session: dispatch plus line history.
pub use console::Console;
/// The key -> link mapping consulted by `open`, `copy`, and `repos`.
pub use directory::Directory;
/// One element of the directory's source enumeration.
pub use directory::SourceEntry;
/// Line history with cursor-based recall.
pub use history::HistoryBuffer;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Collaborators handed to every command.
pub use interpreter::Environment;
/// Append-only rendering target.
pub use sink::OutputSink;
/// In-memory sink that records emitted lines.
pub use sink::RecordingSink;
/// Rendering style of one emitted line.
pub use sink::Style;
