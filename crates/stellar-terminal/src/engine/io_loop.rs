//! The I/O thread: sole owner of the PTY session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::lock;
use super::terminal::Terminal;
use crate::event::{EventProxy, TerminalEvent};
use crate::pty::PtySession;

/// Most bytes processed per lock acquisition.
const READ_CHUNK: usize = 16 * 1024;

/// Requests from the engine handle. Drained only by the I/O thread, so the
/// PTY has exactly one writer.
#[derive(Debug)]
pub(crate) enum IoCommand {
    Input(Vec<u8>),
    Resize { cols: u16, rows: u16 },
    Shutdown,
}

pub(crate) struct IoLoop {
    pub(crate) session: PtySession,
    pub(crate) terminal: Arc<Mutex<Terminal>>,
    pub(crate) commands: Receiver<IoCommand>,
    pub(crate) proxy: EventProxy,
    pub(crate) alive: Arc<AtomicBool>,
}

impl IoLoop {
    pub(crate) fn run(mut self) {
        info!(shell = self.session.shell_path(), "I/O loop started");
        let mut generation = self.session.generation();

        'outer: loop {
            loop {
                match self.commands.try_recv() {
                    Ok(IoCommand::Input(bytes)) => self.session.write(&bytes),
                    Ok(IoCommand::Resize { cols, rows }) => {
                        if let Err(e) = self.session.resize(rows, cols) {
                            warn!(error = %e, cols, rows, "pty resize failed");
                        }
                    }
                    Ok(IoCommand::Shutdown) | Err(TryRecvError::Disconnected) => break 'outer,
                    Err(TryRecvError::Empty) => break,
                }
            }

            let bytes = self.session.read(READ_CHUNK);
            if !bytes.is_empty() {
                let events = {
                    let mut terminal = lock(&self.terminal);
                    terminal.process(&bytes);
                    terminal.take_events()
                };
                self.proxy.send_all(events);
            }

            if self.session.generation() != generation {
                generation = self.session.generation();
                self.proxy
                    .send_event(TerminalEvent::ChildRespawned { generation });
            }

            if self.session.is_closed() {
                self.proxy.send_event(TerminalEvent::ChildExited);
                break;
            }
        }

        self.session.close();
        self.alive.store(false, Ordering::SeqCst);
        info!("I/O loop stopped");
    }
}
