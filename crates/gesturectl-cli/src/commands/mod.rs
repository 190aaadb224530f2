//! CLI command definitions and dispatch.

pub mod classify;
pub mod config;
pub mod policies;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gesturectl_common::config::GesturectlConfig;

/// gesturectl: control a game with hand gestures.
#[derive(Parser, Debug)]
#[command(name = "gesturectl", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file.
    #[arg(long, global = true, env = "GESTURECTL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether the command takes over the terminal with the UI.
    pub const fn draws_to_terminal(&self) -> bool {
        matches!(&self.command, Command::Run(args) if !args.headless)
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn live hand landmarks into key presses.
    Run(run::RunArgs),
    /// Replay a landmark trace through a policy and list the actions.
    Classify(classify::ClassifyArgs),
    /// Print the effective configuration as TOML.
    Config(config::ConfigArgs),
    /// List the gesture policies.
    Policies(policies::PoliciesArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command, config, ..
    } = cli;
    let config_path = config.as_deref();
    match command {
        Command::Run(args) => run::execute(&args, config_path),
        Command::Classify(args) => classify::execute(&args, config_path),
        Command::Config(args) => config::execute(&args, config_path),
        Command::Policies(args) => policies::execute(&args),
    }
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<GesturectlConfig> {
    GesturectlConfig::load_or_default(path).map_err(|e| anyhow::anyhow!("{e}"))
}
