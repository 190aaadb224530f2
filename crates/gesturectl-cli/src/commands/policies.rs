//! `gesturectl policies`: list the gesture policies.

use clap::Args;
use gesturectl_common::types::PolicyKind;

/// Arguments for the `policies` command.
#[derive(Args, Debug)]
pub struct PoliciesArgs {}

/// Executes the `policies` command.
///
/// # Errors
///
/// Never fails; returns `Result` for uniform dispatch.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(_args: &PoliciesArgs) -> anyhow::Result<()> {
    println!("{:<12} {}", "POLICY", "DESCRIPTION");
    for kind in PolicyKind::ALL {
        let marker = if kind == PolicyKind::default() { " (default)" } else { "" };
        println!("{:<12} {}{marker}", kind.as_str(), kind.description());
    }
    Ok(())
}
