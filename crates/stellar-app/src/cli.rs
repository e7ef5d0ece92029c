use std::path::PathBuf;

use clap::Parser;

/// Stellar: run commands in a real shell and print what the terminal shows.
#[derive(Parser, Debug)]
#[command(name = "stellar", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Shell to launch instead of the configured one.
    #[arg(long)]
    pub shell: Option<String>,

    #[arg(long)]
    pub cols: Option<u16>,

    #[arg(long)]
    pub rows: Option<u16>,

    /// Command line to type into the shell; may be repeated.
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// How long to let the shell run before taking the snapshot.
    #[arg(long, default_value_t = 500)]
    pub wait_ms: u64,

    /// Print the screen this many lines back in the scrollback.
    #[arg(long, default_value_t = 0)]
    pub scrollback_view: usize,

    /// Log filter directive (e.g. `debug`, `stellar_terminal=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["stellar"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.commands.is_empty());
        assert_eq!(args.wait_ms, 500);
        assert_eq!(args.scrollback_view, 0);
    }

    #[test]
    fn repeated_commands_keep_order() {
        let args = Args::try_parse_from([
            "stellar", "-c", "ls", "--command", "pwd", "--cols", "100", "--rows", "30",
        ])
        .unwrap();
        assert_eq!(args.commands, vec!["ls".to_string(), "pwd".to_string()]);
        assert_eq!(args.cols, Some(100));
        assert_eq!(args.rows, Some(30));
    }

    #[test]
    fn rejects_bad_geometry() {
        assert!(Args::try_parse_from(["stellar", "--cols", "wide"]).is_err());
    }
}
