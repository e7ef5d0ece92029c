//! Shell selection.
//!
//! The configured program wins; otherwise the user's login shell is taken
//! from the environment.

use stellar_config::ShellConfig;

/// `$SHELL` (`%COMSPEC%` on Windows), or `/bin/sh` (`cmd.exe`) when unset
/// or blank.
pub fn default_shell() -> String {
    #[cfg(windows)]
    let (var, fallback) = ("COMSPEC", "cmd.exe");
    #[cfg(not(windows))]
    let (var, fallback) = ("SHELL", "/bin/sh");

    std::env::var(var)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// The shell to launch for `config`: its `program` if set, else
/// [`default_shell`].
pub fn resolve_shell(config: &ShellConfig) -> String {
    let program = config.program.trim();
    if program.is_empty() {
        default_shell()
    } else {
        program.to_string()
    }
}

/// Login flags for shells that accept `--login`.
pub fn login_flags(shell: &str) -> Vec<String> {
    let name = shell.rsplit(['/', '\\']).next().unwrap_or(shell);
    match name {
        "zsh" | "bash" | "fish" => vec!["--login".to_string()],
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_shell_is_always_available() {
        assert_ne!(default_shell().trim(), "");
    }

    #[test]
    fn configured_program_wins() {
        let config = ShellConfig {
            program: " /usr/bin/zsh ".into(),
            ..ShellConfig::default()
        };
        assert_eq!(resolve_shell(&config), "/usr/bin/zsh");
    }

    #[test]
    fn empty_program_detects() {
        assert_eq!(resolve_shell(&ShellConfig::default()), default_shell());
    }

    #[test]
    fn login_flags_by_shell_name() {
        for shell in ["/bin/zsh", "bash", "/usr/bin/fish", r"C:\msys64\usr\bin\bash"] {
            assert_eq!(login_flags(shell), ["--login"], "{shell}");
        }
        assert!(login_flags("/bin/sh").is_empty());
        assert!(login_flags("/opt/not-bash").is_empty());
    }
}
