//! Command trait, registry, and dispatch logic.
//!
//! One raw line in: trim, split on whitespace, resolve the first token
//! through the alias table, dispatch to the registered command. All
//! failure is expressed as styled sink lines; nothing escapes the
//! dispatch boundary as an error.

use std::collections::HashMap;

use prae_types::error::Result;

use crate::collab::{Clipboard, Navigator, PendingCopy};
use crate::directory::Directory;
use crate::sink::{OutputSink, Style};

/// Collaborators handed to every command.
///
/// The directory is read-only; the sink, navigator, and clipboard are the
/// only channels a command may produce effects through.
pub struct Environment<'a> {
    /// The link directory consulted by `repos`, `open`, and `copy`.
    pub directory: &'a Directory,
    /// Rendering target for emitted lines.
    pub sink: &'a mut dyn OutputSink,
    /// Navigation collaborator for `open`.
    pub navigator: &'a mut dyn Navigator,
    /// Clipboard collaborator for `copy`, if one is available.
    pub clipboard: Option<&'a mut dyn Clipboard>,
    /// Clipboard writes whose completion has not arrived yet.
    pub pending_copies: &'a mut Vec<PendingCopy>,
}

/// A single executable command.
pub trait Command {
    /// The canonical command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "open \<key\>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()>;
}

/// Width of the usage column in `help` output.
const HELP_USAGE_WIDTH: usize = 20;

/// Registry of available commands with dispatch.
///
/// Also holds the fixed alias table (`h`, `ls`, `o`, `cls`). Aliases are
/// resolved before lookup and never change after construction.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Create a registry with no commands and the fixed alias table.
    pub fn new() -> Self {
        let aliases = [("h", "help"), ("ls", "repos"), ("o", "open"), ("cls", "clear")]
            .into_iter()
            .map(|(a, c)| (a.to_string(), c.to_string()))
            .collect();
        Self {
            commands: HashMap::new(),
            aliases,
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Resolve a raw command token to its canonical form.
    ///
    /// The token is lower-cased; if it names an alias the canonical
    /// command is returned, otherwise the lower-cased token unchanged.
    pub fn resolve_alias(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        match self.aliases.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }

    /// Parse and dispatch one raw input line.
    ///
    /// Empty or whitespace-only lines do nothing. Only the first argument
    /// is consumed by any current command; extras are ignored. Unknown
    /// commands produce an err-styled line.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(first) = tokens.next() else { return };
        let name = self.resolve_alias(first);
        let args: Vec<&str> = tokens.collect();
        log::debug!("dispatch: {name} ({} args)", args.len());

        // `help` needs registry access, so it is intercepted rather than
        // registered.
        if name == "help" {
            self.execute_help(env);
            return;
        }

        match self.commands.get(&name) {
            Some(cmd) => {
                if let Err(e) = cmd.execute(&args, env) {
                    env.sink.emit(&format!("error: {e}"), Style::Err);
                }
            }
            None => env
                .sink
                .emit(&format!("error: unknown command \"{name}\""), Style::Err),
        }
    }

    /// Render the usage block, one muted line per command.
    ///
    /// The `open` and `copy` lines list the currently known directory
    /// keys, comma-joined, in directory iteration order.
    fn execute_help(&self, env: &mut Environment<'_>) {
        env.sink.emit(
            &format!("{:<HELP_USAGE_WIDTH$}Show this help", "help"),
            Style::Muted,
        );
        for name in ["repos", "open", "copy", "clear"] {
            let Some(cmd) = self.commands.get(name) else {
                continue;
            };
            let mut desc = cmd.description().to_string();
            if matches!(name, "open" | "copy") {
                let keys: Vec<&str> = env.directory.keys().collect();
                desc = format!("{desc} (keys: {})", keys.join(", "));
            }
            env.sink
                .emit(&format!("{:<HELP_USAGE_WIDTH$}{desc}", cmd.usage()), Style::Muted);
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
