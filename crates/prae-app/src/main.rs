//! Prae terminal entry point.
//!
//! Reads link shortcuts from a TOML file, then runs the console over
//! stdin/stdout: every line is a submission, Ctrl-D ends the session.
//! Links file resolution: argv[1], then $PRAE_LINKS, then ./links.toml.

mod collab;
mod config;
mod sink;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use prae_console::{
    Clipboard, Console, Directory, Environment, PendingCopy, banner, poll_copies,
};
use prae_types::input::KeyEvent;

use collab::{SystemClipboard, SystemNavigator};
use config::PraeConfig;
use sink::AnsiSink;

fn links_path() -> PathBuf {
    env::args()
        .nth(1)
        .or_else(|| env::var("PRAE_LINKS").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("links.toml"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = links_path();
    let config = PraeConfig::load(&path)?;
    let directory = Directory::build(config.source_entries());
    log::info!("Loaded {} links from {}", directory.len(), path.display());

    let mut console = Console::new();
    let mut out = AnsiSink::new(io::stdout());
    let mut navigator = SystemNavigator;
    let mut clipboard = SystemClipboard::detect();
    let mut pending: Vec<PendingCopy> = Vec::new();

    banner(&mut out);

    let stdin = io::stdin();
    let mut prompt = io::stderr();
    loop {
        let _ = write!(prompt, "> ");
        let _ = prompt.flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        {
            let mut env = Environment {
                directory: &directory,
                sink: &mut out,
                navigator: &mut navigator,
                clipboard: clipboard.as_mut().map(|c| c as &mut dyn Clipboard),
                pending_copies: &mut pending,
            };
            console.handle_key(KeyEvent::Enter, line, &mut env);
        }

        // Completions from earlier copies land before the next prompt.
        poll_copies(&mut pending, &mut out);
    }

    log::info!("session ended");
    Ok(())
}
