//! `gesturectl config`: print the effective configuration.

use std::path::Path;

use anyhow::anyhow;
use clap::Args;
use gesturectl_common::config::GesturectlConfig;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults, ignoring any configuration file.
    #[arg(long)]
    pub defaults: bool,
}

/// Executes the `config` command.
///
/// Prints the configuration as TOML, ready to be saved and edited.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded.
pub fn execute(args: &ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = if args.defaults {
        GesturectlConfig::default()
    } else {
        super::load_config(config_path)?
    };
    print!("{}", config.to_toml().map_err(|e| anyhow!("{e}"))?);
    Ok(())
}
