//! Core TOML config loading: read from a path, a string, or the platform
//! default location.

use crate::schema::StellarConfig;
use crate::validation;
use std::path::{Path, PathBuf};
use stellar_common::ConfigError;
use tracing::{info, warn};

/// Parse a config document.
///
/// Missing fields take their serde defaults. Validation problems are logged
/// and the parsed config is returned as-is.
pub fn load_from_str(content: &str) -> Result<StellarConfig, ConfigError> {
    let config: StellarConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} (using parsed config with potentially invalid values)");
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<StellarConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/stellar/config.toml`
/// On macOS: `~/Library/Application Support/stellar/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("stellar").join("config.toml"))
}
