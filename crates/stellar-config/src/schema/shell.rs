//! `[shell]` section: what runs on the slave side of the PTY.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The child process spawned for a session, and how it is started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Program to run. Left empty, `$SHELL` is used, then a platform fallback.
    pub program: String,
    /// Arguments after the program name.
    pub args: Vec<String>,
    /// Starting directory for the child; unset keeps ours.
    pub working_directory: Option<String>,
    /// Variables set in the child on top of the inherited environment.
    pub env: HashMap<String, String>,
    /// Launch interactive login shells with `--login` where supported.
    pub login_shell: bool,
}
