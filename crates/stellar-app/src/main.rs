mod cli;
mod render;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use stellar_config::StellarConfig;
use stellar_terminal::TerminalEngine;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG: &str = "stellar=info,stellar_terminal=info,stellar_config=info";

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid --log-level {directive:?}: {e}");
            EnvFilter::new(DEFAULT_LOG)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &cli::Args) -> Result<StellarConfig> {
    let mut config = match &args.config {
        Some(path) => stellar_config::load_config(Some(path.as_path()))
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => stellar_config::load_config(None).unwrap_or_else(|e| {
            tracing::warn!("config load failed, using defaults: {e}");
            StellarConfig::default()
        }),
    };

    if let Some(shell) = &args.shell {
        config.shell.program.clone_from(shell);
    }
    if let Some(cols) = args.cols {
        config.terminal.cols = cols;
    }
    if let Some(rows) = args.rows {
        config.terminal.rows = rows;
    }
    Ok(config)
}

fn run(args: cli::Args) -> Result<()> {
    let config = load_config(&args)?;
    let theme = Arc::new(config.theme.clone());

    let mut engine = TerminalEngine::spawn(&config, theme).context("starting shell")?;
    let events = engine.take_events();

    for command in &args.commands {
        engine.send_input(&format!("{command}\r"));
    }
    thread::sleep(Duration::from_millis(args.wait_ms));

    if let Some(events) = events {
        for event in events.try_iter() {
            tracing::debug!(?event, "terminal event");
        }
    }

    let region = engine.get_visible_region(args.scrollback_view);
    println!("{}", render::render_region(&region));

    let title = engine.get_terminal_title();
    if !title.is_empty() {
        println!("title: {title}");
    }
    let cwd = engine.get_current_working_directory();
    if !cwd.is_empty() {
        println!("cwd: {cwd}");
    }

    engine.close();
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    tracing::info!("stellar v{} starting", env!("CARGO_PKG_VERSION"));
    run(args)
}
