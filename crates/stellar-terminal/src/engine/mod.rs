//! The terminal engine: a shell, its PTY, and the screen it draws on.
//!
//! [`Terminal`] is the pipeline on its own (bytes in, screen state out) and
//! can be driven directly for replay and tests. [`TerminalEngine`] adds a
//! live shell: a background I/O thread owns the [`PtySession`], feeds its
//! output into the shared `Terminal`, and is the only writer to the PTY.
//!
//! ```text
//!  send_input ──► command queue ──► I/O thread ──► PTY ──► shell
//!                                       │
//!                 snapshot ◄── Mutex<Terminal> ◄── output
//! ```

mod io_loop;
mod terminal;
mod utf8;

pub use terminal::*;
pub use utf8::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use stellar_common::Theme;
use stellar_config::StellarConfig;
use tracing::{debug, info, warn};

use self::io_loop::{IoCommand, IoLoop};
use crate::event::{EventProxy, TerminalEvent};
use crate::input::{Key, KeyEncoder, Modifiers};
use crate::pty::{PtyError, PtySession, SessionOptions};
use crate::screen::{CursorState, Row};
use crate::shell::resolve_shell;

/// A panicking holder must not take the screen down with it.
pub(crate) fn lock(terminal: &Mutex<Terminal>) -> MutexGuard<'_, Terminal> {
    terminal.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// TerminalEngine
// ---------------------------------------------------------------------------

pub struct TerminalEngine {
    terminal: Arc<Mutex<Terminal>>,
    commands: Sender<IoCommand>,
    proxy: EventProxy,
    events: Option<Receiver<TerminalEvent>>,
    io_thread: Option<JoinHandle<()>>,
    alive: Arc<AtomicBool>,
    keys: KeyEncoder,
}

impl TerminalEngine {
    /// Start the configured shell. Failing to spawn it is the only error
    /// an engine ever reports.
    pub fn spawn(config: &StellarConfig, theme: Arc<dyn Theme>) -> Result<Self, PtyError> {
        let shell = resolve_shell(&config.shell);
        let session = PtySession::spawn(&shell, SessionOptions::from_config(config, &shell))?;

        let terminal = Arc::new(Mutex::new(Terminal::new(&config.terminal, theme)));
        let (proxy, events) = EventProxy::new();
        let (commands, command_rx) = mpsc::channel();
        let alive = Arc::new(AtomicBool::new(true));

        let io = IoLoop {
            session,
            terminal: Arc::clone(&terminal),
            commands: command_rx,
            proxy: proxy.clone(),
            alive: Arc::clone(&alive),
        };
        let io_thread = thread::Builder::new()
            .name("stellar-io".into())
            .spawn(move || io.run())?;

        info!(%shell, cols = config.terminal.cols, rows = config.terminal.rows, "terminal engine started");
        Ok(Self {
            terminal,
            commands,
            proxy,
            events: Some(events),
            io_thread: Some(io_thread),
            alive,
            keys: KeyEncoder::from_config(&config.terminal),
        })
    }

    // -- input --------------------------------------------------------------

    /// Queue text for the shell.
    pub fn send_input(&self, text: &str) {
        self.send_bytes(text.as_bytes());
    }

    pub fn send_bytes(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.command(IoCommand::Input(bytes.to_vec()));
    }

    pub fn send_key(&self, key: Key, mods: Modifiers) {
        self.send_bytes(&self.keys.encode(key, mods));
    }

    /// Resize the screen now and the PTY as soon as the I/O thread gets
    /// to it.
    pub fn resize(&self, cols: u16, rows: u16) {
        let (cols, rows) = (cols.max(1), rows.max(1));
        lock(&self.terminal).resize(usize::from(cols), usize::from(rows));
        self.command(IoCommand::Resize { cols, rows });
    }

    /// Feed output that did not come from the shell, e.g. a replayed
    /// transcript.
    pub fn handle_output(&self, bytes: &[u8]) {
        let events = {
            let mut terminal = lock(&self.terminal);
            terminal.process(bytes);
            terminal.take_events()
        };
        self.proxy.send_all(events);
    }

    // -- snapshots ----------------------------------------------------------

    pub fn get_visible_region(&self, scroll_offset: usize) -> Vec<Row> {
        lock(&self.terminal).visible_region(scroll_offset)
    }

    pub fn get_cursor(&self) -> CursorState {
        lock(&self.terminal).cursor()
    }

    pub fn get_terminal_title(&self) -> String {
        lock(&self.terminal).title().to_string()
    }

    pub fn get_current_working_directory(&self) -> String {
        lock(&self.terminal).cwd().to_string()
    }

    pub fn take_dirty_rows(&self) -> Vec<bool> {
        lock(&self.terminal).take_dirty()
    }

    pub fn scrollback_len(&self) -> usize {
        lock(&self.terminal).scrollback_len()
    }

    /// Run `f` against the terminal while holding the lock.
    pub fn with_terminal<R>(&self, f: impl FnOnce(&Terminal) -> R) -> R {
        f(&lock(&self.terminal))
    }

    // -- lifecycle ----------------------------------------------------------

    /// `false` once the shell is gone for good or the engine is closed.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// The event stream. Only the first call returns it.
    pub fn take_events(&mut self) -> Option<Receiver<TerminalEvent>> {
        self.events.take()
    }

    pub fn set_theme(&self, theme: Arc<dyn Theme>) {
        lock(&self.terminal).set_theme(theme);
    }

    /// Returns `true` when the cursor needs redrawing.
    pub fn tick_cursor_blink(&self, now: Instant) -> bool {
        lock(&self.terminal).tick_cursor_blink(now)
    }

    /// Stop the I/O thread and the shell. Returns once both are gone.
    pub fn close(&mut self) {
        let Some(handle) = self.io_thread.take() else {
            return;
        };
        self.command(IoCommand::Shutdown);
        if handle.join().is_err() {
            warn!("I/O thread panicked");
        }
        self.alive.store(false, Ordering::SeqCst);
        info!("terminal engine closed");
    }

    fn command(&self, command: IoCommand) {
        if self.commands.send(command).is_err() {
            debug!("I/O loop gone, command dropped");
        }
    }
}

impl Drop for TerminalEngine {
    fn drop(&mut self) {
        self.close();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
