//! Builtin commands for the Prae console.

use prae_types::error::Result;

use crate::collab::{ClipboardWrite, PendingCopy};
use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::sink::{OutputSink, Style};

/// Startup banner line, re-emitted after every clear.
pub const BANNER: &str = "Prae \u{2301} type \"help\" for commands.";

/// Emit the startup banner.
pub fn banner(sink: &mut dyn OutputSink) {
    sink.emit(BANNER, Style::Muted);
}

/// Register the builtin commands into a registry.
///
/// `help` is not registered; the registry intercepts it because it needs
/// access to the other commands' usage strings.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(ReposCmd));
    reg.register(Box::new(OpenCmd));
    reg.register(Box::new(CopyCmd));
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// repos
// ---------------------------------------------------------------------------

struct ReposCmd;
impl Command for ReposCmd {
    fn name(&self) -> &str {
        "repos"
    }
    fn description(&self) -> &str {
        "List linked repositories"
    }
    fn usage(&self) -> &str {
        "repos"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        if env.directory.is_empty() {
            env.sink.emit("No repositories found.", Style::Warn);
            return Ok(());
        }
        for (key, record) in env.directory.iter() {
            env.sink.emit(
                &format!("[{key}] {} \u{2014} {}", record.title, record.url),
                Style::Plain,
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open repo"
    }
    fn usage(&self) -> &str {
        "open <key>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let Some(key) = args.first() else {
            env.sink.emit("usage: open <key>", Style::Warn);
            return Ok(());
        };
        let Some(record) = env.directory.get(key) else {
            env.sink
                .emit(&format!("error: unknown key \"{key}\""), Style::Err);
            return Ok(());
        };
        // Navigation is the effect; no output line on success.
        log::info!("navigating to {}", record.url);
        env.navigator.navigate(&record.url);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

struct CopyCmd;
impl Command for CopyCmd {
    fn name(&self) -> &str {
        "copy"
    }
    fn description(&self) -> &str {
        "Copy repo URL"
    }
    fn usage(&self) -> &str {
        "copy <key>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let Some(key) = args.first() else {
            env.sink.emit("usage: copy <key>", Style::Warn);
            return Ok(());
        };
        let Some(record) = env.directory.get(key) else {
            env.sink
                .emit(&format!("error: unknown key \"{key}\""), Style::Err);
            return Ok(());
        };
        let Some(clip) = env.clipboard.as_mut() else {
            // No collaborator: fall back to printing the URL.
            env.sink.emit(&record.url, Style::Muted);
            return Ok(());
        };
        match clip.write_text(&record.url) {
            ClipboardWrite::Done(true) => env.sink.emit("copied", Style::Ok),
            ClipboardWrite::Done(false) => env.sink.emit(&record.url, Style::Muted),
            ClipboardWrite::Pending(rx) => env.pending_copies.push(PendingCopy {
                url: record.url.clone(),
                rx,
            }),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear console"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.sink.clear();
        banner(&mut *env.sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{Clipboard, Navigator, poll_copies};
    use crate::directory::{Directory, SourceEntry};
    use crate::sink::RecordingSink;
    use prae_types::link::LinkRecord;
    use std::sync::mpsc;

    #[derive(Default)]
    struct RecordingNav {
        visits: Vec<String>,
    }
    impl Navigator for RecordingNav {
        fn navigate(&mut self, url: &str) {
            self.visits.push(url.to_string());
        }
    }

    /// Clipboard that completes synchronously with a fixed outcome.
    struct SyncClipboard {
        succeed: bool,
        writes: Vec<String>,
    }
    impl SyncClipboard {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                writes: Vec::new(),
            }
        }
    }
    impl Clipboard for SyncClipboard {
        fn write_text(&mut self, text: &str) -> ClipboardWrite {
            self.writes.push(text.to_string());
            ClipboardWrite::Done(self.succeed)
        }
    }

    /// Clipboard that completes later over a channel.
    struct AsyncClipboard {
        tx: Option<mpsc::Sender<bool>>,
    }
    impl Clipboard for AsyncClipboard {
        fn write_text(&mut self, _text: &str) -> ClipboardWrite {
            let (tx, rx) = mpsc::channel();
            self.tx = Some(tx);
            ClipboardWrite::Pending(rx)
        }
    }

    fn sample_directory() -> Directory {
        Directory::build([SourceEntry {
            key: "prae".into(),
            link: Some(LinkRecord::new("Prae", "https://x/p")),
        }])
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        reg
    }

    struct Fixture {
        dir: Directory,
        sink: RecordingSink,
        nav: RecordingNav,
        pending: Vec<PendingCopy>,
    }

    impl Fixture {
        fn new(dir: Directory) -> Self {
            Self {
                dir,
                sink: RecordingSink::new(),
                nav: RecordingNav::default(),
                pending: Vec::new(),
            }
        }

        fn run(&mut self, line: &str) {
            self.run_with_clipboard(line, None);
        }

        fn run_with_clipboard<'a>(&'a mut self, line: &str, clipboard: Option<&'a mut dyn Clipboard>) {
            let reg = registry();
            let mut env = Environment {
                directory: &self.dir,
                sink: &mut self.sink,
                navigator: &mut self.nav,
                clipboard,
                pending_copies: &mut self.pending,
            };
            reg.execute(line, &mut env);
        }
    }

    // -- repos --

    #[test]
    fn repos_on_empty_directory_warns_once() {
        let mut fx = Fixture::new(Directory::build([]));
        fx.run("repos");
        assert_eq!(
            fx.sink.lines(),
            [("No repositories found.".to_string(), Style::Warn)]
        );
    }

    #[test]
    fn repos_lists_entries_in_order() {
        let mut fx = Fixture::new(Directory::build([
            SourceEntry {
                key: "prae".into(),
                link: Some(LinkRecord::new("Prae", "https://x/p")),
            },
            SourceEntry {
                key: "aux".into(),
                link: Some(LinkRecord::new("Aux", "https://x/a")),
            },
        ]));
        fx.run("repos");
        let lines = fx.sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "[prae] Prae \u{2014} https://x/p");
        assert_eq!(lines[1].0, "[aux] Aux \u{2014} https://x/a");
    }

    #[test]
    fn ls_is_an_alias_for_repos() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("ls");
        assert_eq!(fx.sink.lines().len(), 1);
        assert_eq!(fx.sink.lines()[0].0, "[prae] Prae \u{2014} https://x/p");
    }

    // -- open --

    #[test]
    fn open_navigates_with_no_output() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("open prae");
        assert!(fx.sink.lines().is_empty());
        assert_eq!(fx.nav.visits, ["https://x/p"]);
    }

    #[test]
    fn open_is_case_insensitive_on_keys() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("open PRAE");
        assert_eq!(fx.nav.visits, ["https://x/p"]);
    }

    #[test]
    fn open_unknown_key_emits_err_and_never_navigates() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("open nope");
        assert_eq!(
            fx.sink.lines(),
            [("error: unknown key \"nope\"".to_string(), Style::Err)]
        );
        assert!(fx.nav.visits.is_empty());
    }

    #[test]
    fn open_without_key_emits_usage_warning() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("open");
        assert_eq!(
            fx.sink.lines(),
            [("usage: open <key>".to_string(), Style::Warn)]
        );
        assert!(fx.nav.visits.is_empty());
    }

    #[test]
    fn open_ignores_extra_arguments() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("open prae and some junk");
        assert_eq!(fx.nav.visits, ["https://x/p"]);
    }

    #[test]
    fn o_is_an_alias_for_open() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("o prae");
        assert_eq!(fx.nav.visits, ["https://x/p"]);
    }

    // -- copy --

    #[test]
    fn copy_without_key_emits_usage_warning() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("copy");
        assert_eq!(
            fx.sink.lines(),
            [("usage: copy <key>".to_string(), Style::Warn)]
        );
    }

    #[test]
    fn copy_unknown_key_never_touches_clipboard() {
        let mut fx = Fixture::new(sample_directory());
        let mut clip = SyncClipboard::new(true);
        fx.run_with_clipboard("copy nope", Some(&mut clip));
        assert_eq!(
            fx.sink.lines(),
            [("error: unknown key \"nope\"".to_string(), Style::Err)]
        );
        assert!(clip.writes.is_empty());
    }

    #[test]
    fn copy_without_collaborator_prints_raw_url() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("copy prae");
        assert_eq!(
            fx.sink.lines(),
            [("https://x/p".to_string(), Style::Muted)]
        );
    }

    #[test]
    fn copy_sync_success_emits_copied() {
        let mut fx = Fixture::new(sample_directory());
        let mut clip = SyncClipboard::new(true);
        fx.run_with_clipboard("copy prae", Some(&mut clip));
        assert_eq!(fx.sink.lines(), [("copied".to_string(), Style::Ok)]);
        assert_eq!(clip.writes, ["https://x/p"]);
    }

    #[test]
    fn copy_sync_failure_falls_back_to_raw_url() {
        let mut fx = Fixture::new(sample_directory());
        let mut clip = SyncClipboard::new(false);
        fx.run_with_clipboard("copy prae", Some(&mut clip));
        assert_eq!(
            fx.sink.lines(),
            [("https://x/p".to_string(), Style::Muted)]
        );
    }

    #[test]
    fn copy_pending_resolves_on_poll() {
        let mut fx = Fixture::new(sample_directory());
        let mut clip = AsyncClipboard { tx: None };
        fx.run_with_clipboard("copy prae", Some(&mut clip));
        assert!(fx.sink.lines().is_empty());
        assert_eq!(fx.pending.len(), 1);

        clip.tx.take().unwrap().send(true).unwrap();
        poll_copies(&mut fx.pending, &mut fx.sink);
        assert_eq!(fx.sink.lines(), [("copied".to_string(), Style::Ok)]);
        assert!(fx.pending.is_empty());
    }

    #[test]
    fn copy_key_lookup_is_case_insensitive() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("copy PRAE");
        assert_eq!(
            fx.sink.lines(),
            [("https://x/p".to_string(), Style::Muted)]
        );
    }

    // -- clear --

    #[test]
    fn clear_wipes_sink_and_reemits_banner() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("repos");
        fx.run("clear");
        assert_eq!(fx.sink.clears(), 1);
        assert_eq!(fx.sink.lines(), [(BANNER.to_string(), Style::Muted)]);
    }

    #[test]
    fn cls_is_an_alias_for_clear() {
        let mut fx = Fixture::new(sample_directory());
        fx.run("cls");
        assert_eq!(fx.sink.clears(), 1);
        assert_eq!(fx.sink.lines(), [(BANNER.to_string(), Style::Muted)]);
    }
}
