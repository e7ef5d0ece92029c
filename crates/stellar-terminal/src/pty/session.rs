//! A shell running behind a pseudo-terminal.
//!
//! Output is read on a background thread and handed over through a channel,
//! so [`PtySession::read`] waits at most one poll interval. Input goes the
//! other way through a bounded queue to a writer thread; whatever the queue
//! cannot take yet stays in the session and is retried on the next call, so
//! [`PtySession::write`] never waits on the child. I/O errors are absorbed
//! here: the session logs them and respawns a dead shell, up to the
//! configured limit.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use portable_pty::{native_pty_system, Child, CommandBuilder, MasterPty, PtySize};
use tracing::{debug, error, info, warn};

use super::types::{PtyError, SessionOptions};

const READ_BUFFER: usize = 8192;
const REAP_ATTEMPTS: u32 = 20;
const REAP_INTERVAL: Duration = Duration::from_millis(10);
/// Chunks in flight to the writer thread.
const INPUT_QUEUE: usize = 64;
/// Input held back while the child is not reading; beyond this it is dropped.
const MAX_UNSENT: usize = 4 * 1024 * 1024;

fn window(rows: u16, cols: u16) -> PtySize {
    PtySize {
        rows,
        cols,
        ..PtySize::default()
    }
}

fn spawn_failed(e: impl std::fmt::Display) -> PtyError {
    PtyError::SpawnFailed(e.to_string())
}

/// Forward PTY output in chunks until EOF, a read error, or the session
/// dropping its receiver.
fn pump_output(mut output: Box<dyn Read + Send>, chunks: mpsc::Sender<Vec<u8>>) {
    let mut buf = [0u8; READ_BUFFER];
    loop {
        let n = match output.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!(error = %e, "pty reader stopped");
                return;
            }
        };
        if chunks.send(buf[..n].to_vec()).is_err() {
            return;
        }
    }
}

/// Write queued input until the queue closes or the PTY rejects a write.
fn drain_input(mut sink: Box<dyn Write + Send>, input: mpsc::Receiver<Vec<u8>>) {
    for chunk in input {
        if let Err(e) = sink.write_all(&chunk).and_then(|()| sink.flush()) {
            debug!(error = %e, "pty writer stopped");
            return;
        }
    }
}

/// Join `worker` if it finishes within the reap window; otherwise leave it
/// detached. A helper stays blocked only while some other process still
/// holds the slave side open, and it exits once that process lets go.
fn join_within(worker: JoinHandle<()>, pid: Option<u32>) {
    for _ in 0..REAP_ATTEMPTS {
        if worker.is_finished() {
            if worker.join().is_err() {
                warn!(?pid, "pty helper thread panicked");
            }
            return;
        }
        thread::sleep(REAP_INTERVAL);
    }
    let name = worker.thread().name().unwrap_or("pty helper");
    debug!(?pid, thread = name, "pty helper still blocked, detaching");
}

// ---------------------------------------------------------------------------
// PtyHandle
// ---------------------------------------------------------------------------

/// One spawned child and its end of the PTY.
struct PtyHandle {
    master: Box<dyn MasterPty + Send>,
    child: Box<dyn Child + Send + Sync>,
    rx: mpsc::Receiver<Vec<u8>>,
    input: SyncSender<Vec<u8>>,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
    pid: Option<u32>,
}

impl PtyHandle {
    fn open(shell_path: &str, options: &SessionOptions) -> Result<Self, PtyError> {
        let pair = native_pty_system()
            .openpty(window(options.rows, options.cols))
            .map_err(spawn_failed)?;

        let mut cmd = CommandBuilder::new(shell_path);
        cmd.args(&options.args);
        cmd.env("TERM", "xterm-256color");
        cmd.env("COLORTERM", "truecolor");
        for (name, val) in &options.env {
            cmd.env(name, val);
        }
        if let Some(dir) = &options.working_directory {
            cmd.cwd(dir);
        }

        let child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| PtyError::SpawnFailed(format!("{shell_path}: {e}")))?;
        let output = pair.master.try_clone_reader().map_err(spawn_failed)?;
        let sink = pair.master.take_writer().map_err(spawn_failed)?;

        let (chunks, rx) = mpsc::channel();
        let reader = thread::Builder::new()
            .name("stellar-pty-reader".into())
            .spawn(move || pump_output(output, chunks))?;

        let (input, queued) = mpsc::sync_channel(INPUT_QUEUE);
        let writer = thread::Builder::new()
            .name("stellar-pty-writer".into())
            .spawn(move || drain_input(sink, queued))?;

        Ok(PtyHandle {
            pid: child.process_id(),
            master: pair.master,
            child,
            rx,
            input,
            reader,
            writer,
        })
    }

    /// Stop the child, release the PTY and wait briefly for the helper
    /// threads. Never blocks past the reap window per step.
    fn shutdown(self) {
        let PtyHandle {
            master,
            mut child,
            rx,
            input,
            reader,
            writer,
            pid,
        } = self;
        drop(input);

        match child.try_wait() {
            Ok(Some(status)) => debug!(?pid, ?status, "shell already exited"),
            _ => {
                if let Err(e) = child.kill() {
                    debug!(?pid, error = %e, "kill failed");
                }
                for _ in 0..REAP_ATTEMPTS {
                    if matches!(child.try_wait(), Ok(Some(_))) {
                        break;
                    }
                    thread::sleep(REAP_INTERVAL);
                }
            }
        }

        drop(master);
        drop(rx);
        join_within(reader, pid);
        join_within(writer, pid);
    }
}

// ---------------------------------------------------------------------------
// PtySession
// ---------------------------------------------------------------------------

pub struct PtySession {
    shell_path: String,
    options: SessionOptions,
    /// `None` once closed or after giving up on the shell.
    handle: Option<PtyHandle>,
    /// Bumped on every successful respawn.
    generation: u64,
    respawns: u32,
    /// Bytes received but not yet returned by `read`.
    pending: Vec<u8>,
    /// Input the writer queue could not take yet, oldest first.
    unsent: VecDeque<Vec<u8>>,
    unsent_len: usize,
}

impl PtySession {
    /// Open a PTY sized per `options` and start `shell_path` in it.
    pub fn spawn(shell_path: &str, options: SessionOptions) -> Result<Self, PtyError> {
        let handle = PtyHandle::open(shell_path, &options)?;
        info!(
            shell = shell_path,
            pid = ?handle.pid,
            cols = options.cols,
            rows = options.rows,
            "shell spawned"
        );
        Ok(Self {
            shell_path: shell_path.to_string(),
            options,
            handle: Some(handle),
            generation: 0,
            respawns: 0,
            pending: Vec::new(),
            unsent: VecDeque::new(),
            unsent_len: 0,
        })
    }

    pub fn shell_path(&self) -> &str {
        &self.shell_path
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn pid(&self) -> Option<u32> {
        self.handle.as_ref().and_then(|h| h.pid)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Up to `max_bytes` of shell output, waiting at most one poll
    /// interval. Empty when nothing arrived.
    pub fn read(&mut self, max_bytes: usize) -> Vec<u8> {
        self.flush_input();
        let max_bytes = max_bytes.max(1);
        if !self.pending.is_empty() {
            let rest = self.pending.split_off(max_bytes.min(self.pending.len()));
            return std::mem::replace(&mut self.pending, rest);
        }

        let Some(handle) = self.handle.as_ref() else {
            thread::sleep(self.options.poll_interval);
            return Vec::new();
        };

        match handle.rx.recv_timeout(self.options.poll_interval) {
            Ok(mut data) => {
                while data.len() < max_bytes {
                    let Ok(more) = handle.rx.try_recv() else { break };
                    data.extend_from_slice(&more);
                }
                if data.len() > max_bytes {
                    self.pending = data.split_off(max_bytes);
                }
                data
            }
            Err(RecvTimeoutError::Timeout) => Vec::new(),
            Err(RecvTimeoutError::Disconnected) => {
                self.recover("output stream closed", true);
                Vec::new()
            }
        }
    }

    /// Queue bytes for the shell without waiting for it to read them.
    /// Input for a closed session, or past the backlog limit, is dropped.
    pub fn write(&mut self, data: &[u8]) {
        if self.handle.is_none() {
            debug!(len = data.len(), "no shell running, input dropped");
            return;
        }
        if data.is_empty() {
            return;
        }
        if self.unsent_len + data.len() > MAX_UNSENT {
            warn!(
                len = data.len(),
                backlog = self.unsent_len,
                "shell is not reading input, dropped"
            );
            return;
        }
        self.unsent_len += data.len();
        self.unsent.push_back(data.to_vec());
        self.flush_input();
    }

    /// Bytes accepted by [`write`](Self::write) that have not yet reached
    /// the writer thread.
    pub fn unsent_len(&self) -> usize {
        self.unsent_len
    }

    /// Hand as much backlog to the writer thread as its queue takes.
    fn flush_input(&mut self) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        let mut writer_gone = false;
        while let Some(chunk) = self.unsent.pop_front() {
            let len = chunk.len();
            match handle.input.try_send(chunk) {
                Ok(()) => self.unsent_len -= len,
                Err(TrySendError::Full(chunk)) => {
                    self.unsent.push_front(chunk);
                    break;
                }
                Err(TrySendError::Disconnected(_)) => {
                    writer_gone = true;
                    break;
                }
            }
        }
        if writer_gone {
            self.discard_input();
            self.recover("input stream closed", false);
        }
    }

    fn discard_input(&mut self) {
        self.unsent.clear();
        self.unsent_len = 0;
    }

    /// Inform the kernel (and thus the child) of the new size. Later
    /// respawns use it too.
    pub fn resize(&mut self, rows: u16, cols: u16) -> Result<(), PtyError> {
        self.options.rows = rows;
        self.options.cols = cols;
        let Some(handle) = self.handle.as_ref() else {
            return Ok(());
        };
        handle
            .master
            .resize(window(rows, cols))
            .map_err(|e| PtyError::ResizeFailed(e.to_string()))
    }

    /// `true` while the child has not exited.
    pub fn is_alive(&mut self) -> bool {
        self.handle
            .as_mut()
            .is_some_and(|h| matches!(h.child.try_wait(), Ok(None)))
    }

    /// `true` after [`close`](Self::close) or once recovery gave up.
    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    /// Replace the child with a fresh shell of the same configuration.
    pub fn respawn(&mut self) -> Result<(), PtyError> {
        if let Some(old) = self.handle.take() {
            old.shutdown();
        }
        self.pending.clear();
        self.discard_input();
        let handle = PtyHandle::open(&self.shell_path, &self.options)?;
        self.generation += 1;
        info!(pid = ?handle.pid, generation = self.generation, "shell respawned");
        self.handle = Some(handle);
        Ok(())
    }

    /// Stop the shell and release the PTY. Idempotent.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            let pid = handle.pid;
            handle.shutdown();
            info!(?pid, "pty session closed");
        }
        self.pending.clear();
        self.discard_input();
    }

    fn recover(&mut self, reason: &str, stream_closed: bool) {
        let alive = self.is_alive();
        warn!(reason, alive, pid = ?self.pid(), "pty I/O error");
        if alive && !stream_closed {
            return;
        }
        if self.respawns >= self.options.max_respawns {
            error!(respawns = self.respawns, "shell keeps exiting, giving up");
            self.close();
            return;
        }
        self.respawns += 1;
        if let Err(e) = self.respawn() {
            error!(error = %e, "respawn failed");
            self.close();
        }
    }
}

impl Drop for PtySession {
    fn drop(&mut self) {
        self.close();
    }
}
