//! Full configuration validation.
//!
//! Validates numeric ranges and color formats, collecting every problem
//! into a single error.

mod helpers;

use crate::schema::StellarConfig;
use helpers::{validate_hex_color, validate_range};
use stellar_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StellarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let t = &config.terminal;

    validate_range(&mut errors, "terminal.cols", t.cols.into(), 2, 1000);
    validate_range(&mut errors, "terminal.rows", t.rows.into(), 1, 500);
    validate_range(&mut errors, "terminal.scrollback_lines", t.scrollback_lines, 0, 100_000);
    validate_range(
        &mut errors,
        "terminal.cursor_blink_interval_ms",
        t.cursor_blink_interval_ms,
        100,
        2000,
    );
    validate_range(&mut errors, "terminal.max_escape_len", t.max_escape_len, 16, 65_536);
    validate_range(&mut errors, "terminal.poll_interval_ms", t.poll_interval_ms, 1, 1000);

    for (key, value) in config.theme.entries() {
        validate_hex_color(&mut errors, &format!("theme.{key}"), value);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors))
    }
}
