//! Typed view of `stellar.toml`.
//!
//! Every section is optional in the file; a missing key takes its default.

mod shell;
mod terminal;

pub use shell::*;
pub use terminal::*;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeConfig;

/// Root configuration, built once and handed by reference to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StellarConfig {
    pub terminal: TerminalConfig,
    pub shell: ShellConfig,
    pub theme: ThemeConfig,
}

// =============================================================================
// Tests
// =============================================================================
