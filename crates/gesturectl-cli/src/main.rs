//! # gesturectl: hand gesture keyboard controller
//!
//! Turns hand landmarks from a webcam helper into arrow-key presses.

mod commands;
mod output;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.draws_to_terminal())?;
    commands::execute(cli)
}

/// Installs the global subscriber.
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, unless
/// the terminal UI owns the screen, in which case they are discarded.
fn init_tracing(log_file: Option<&Path>, draws_to_terminal: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if draws_to_terminal => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
