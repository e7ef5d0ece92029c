//! PTY error and option types.

use std::time::Duration;

use stellar_config::StellarConfig;

use crate::shell::login_flags;

/// Errors originating from PTY operations.
#[derive(Debug, thiserror::Error)]
pub enum PtyError {
    #[error("failed to spawn process: {0}")]
    SpawnFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to resize PTY: {0}")]
    ResizeFailed(String),
}

/// How a [`PtySession`](super::PtySession) launches and supervises its
/// shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub cols: u16,
    pub rows: u16,
    pub args: Vec<String>,
    /// Extra environment; `TERM` is always set.
    pub env: Vec<(String, String)>,
    pub working_directory: Option<String>,
    /// Upper bound on one blocking read.
    pub poll_interval: Duration,
    /// Respawns allowed before the session gives up on the shell.
    pub max_respawns: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            args: Vec::new(),
            env: Vec::new(),
            working_directory: None,
            poll_interval: Duration::from_millis(10),
            max_respawns: 3,
        }
    }
}

impl SessionOptions {
    /// Options for launching `shell` as configured.
    pub fn from_config(config: &StellarConfig, shell: &str) -> Self {
        let mut args = config.shell.args.clone();
        if config.shell.login_shell {
            args.extend(login_flags(shell));
        }
        let mut env: Vec<(String, String)> = config
            .shell
            .env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        env.sort();
        Self {
            cols: config.terminal.cols,
            rows: config.terminal.rows,
            args,
            env,
            working_directory: config.shell.working_directory.clone(),
            poll_interval: Duration::from_millis(u64::from(config.terminal.poll_interval_ms.max(1))),
            max_respawns: config.terminal.max_respawns,
        }
    }
}
