//! Settings for the stellar terminal engine, read from `config.toml`.
//!
//! ```rust,no_run
//! let config = stellar_config::load_config(None)?;
//! assert!(config.terminal.cols > 0);
//! # Ok::<(), stellar_common::ConfigError>(())
//! ```

pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::{CursorStyle, ShellConfig, StellarConfig, TerminalConfig};
pub use theme::{PaletteColors, PrimaryColors, ThemeConfig};
pub use toml_loader::{default_config_path, load_from_path, load_from_str};

use std::path::Path;

use stellar_common::ConfigError;
use tracing::info;

/// Load config from `path`, or from the platform default location.
///
/// A missing default file is not an error: defaults are returned. A missing
/// explicit `path` is reported as [`ConfigError::FileNotFound`].
pub fn load_config(path: Option<&Path>) -> Result<StellarConfig, ConfigError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        return load_from_path(path);
    }

    let path = default_config_path()?;
    if path.exists() {
        load_from_path(&path)
    } else {
        info!("no config found at {}, using defaults", path.display());
        Ok(StellarConfig::default())
    }
}
