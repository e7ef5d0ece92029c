use std::path::PathBuf;

/// Failures while locating, reading or checking `stellar.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("no config directory on this platform")]
    NoConfigDir,

    /// Every out-of-range or malformed value, in the order checked.
    #[error("invalid config: {}", .0.join("; "))]
    ValidationError(Vec<String>),
}
