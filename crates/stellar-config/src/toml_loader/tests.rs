use super::*;
use crate::schema::CursorStyle;
use std::io::Write;
use stellar_common::ConfigError;

#[test]
fn load_full_document() {
    let toml_str = r##"
[terminal]
cols = 120
rows = 40
scrollback_lines = 5000
cursor_style = "bar"

[shell]
program = "/bin/bash"
login_shell = true

[theme]
name = "mono"

[theme.primary]
foreground = "#eeeeee"
"##;
    let config = load_from_str(toml_str).unwrap();
    assert_eq!(config.terminal.cols, 120);
    assert_eq!(config.terminal.rows, 40);
    assert_eq!(config.terminal.scrollback_lines, 5000);
    assert_eq!(config.terminal.cursor_style, CursorStyle::Bar);
    assert_eq!(config.shell.program, "/bin/bash");
    assert!(config.shell.login_shell);
    assert_eq!(config.theme.name, "mono");
    assert_eq!(config.theme.primary.foreground, "#eeeeee");
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = load_from_str("[terminal\ncols = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let err = load_from_str("[terminal]\ncols = \"wide\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_still_load() {
    let config = load_from_str("[terminal]\ncols = 0\n").unwrap();
    assert_eq!(config.terminal.cols, 0);
}

#[test]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[terminal]\nrows = 50").unwrap();

    let config = load_from_path(file.path()).unwrap();
    assert_eq!(config.terminal.rows, 50);
    assert_eq!(config.terminal.cols, 80);
}

#[test]
fn load_from_missing_path_is_error() {
    let err = load_from_path(std::path::Path::new("/nonexistent/config.toml")).unwrap_err();
    match err {
        ConfigError::Unreadable { path, source } => {
            assert!(path.ends_with("config.toml"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Unreadable, got {other:?}"),
    }
}

#[test]
fn default_config_path_ends_with_stellar_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("stellar/config.toml"));
    }
}
