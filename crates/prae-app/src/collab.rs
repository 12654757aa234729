//! System collaborators: URL opener and clipboard tool.
//!
//! Navigation spawns the platform opener and is done; a failed launch is
//! logged, never surfaced as a console error. Clipboard writes pipe the
//! text to an external copy tool on a worker thread and report the
//! outcome over a channel, which the main loop drains via `poll_copies`.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use prae_console::{Clipboard, ClipboardWrite, Navigator};

/// Opens URLs with the platform opener.
pub struct SystemNavigator;

fn opener() -> &'static str {
    if cfg!(target_os = "macos") { "open" } else { "xdg-open" }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, url: &str) {
        let result = Command::new(opener())
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match result {
            Ok(_) => log::info!("opening {url}"),
            Err(e) => log::warn!("could not launch {}: {e}", opener()),
        }
    }
}

/// Copy-tool candidates, in preference order.
const COPY_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Clipboard backed by an external copy tool found on PATH.
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Find a usable copy tool. `None` means no clipboard collaborator,
    /// and `copy` degrades to printing the URL.
    pub fn detect() -> Option<Self> {
        let path = env::var_os("PATH")?;
        for (program, args) in COPY_TOOLS {
            let found = env::split_paths(&path).any(|dir| dir.join(program).is_file());
            if found {
                log::info!("clipboard tool: {program}");
                return Some(Self {
                    program: (*program).to_string(),
                    args: args.iter().map(|a| (*a).to_string()).collect(),
                });
            }
        }
        log::warn!("no clipboard tool on PATH; copy will print URLs instead");
        None
    }

    fn run_tool(program: &str, args: &[String], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardWrite {
        let (tx, rx) = mpsc::channel();
        let program = self.program.clone();
        let args = self.args.clone();
        let text = text.to_string();
        thread::spawn(move || {
            let ok = Self::run_tool(&program, &args, &text).unwrap_or(false);
            let _ = tx.send(ok);
        });
        ClipboardWrite::Pending(rx)
    }
}
