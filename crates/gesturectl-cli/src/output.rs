//! Formatted output helpers for CLI commands.

use std::collections::BTreeMap;
use std::time::Duration;

use gesturectl_common::types::Action;
use gesturectl_runtime::RunSummary;

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RESET: &str = "\x1b[0m";

/// Formats a stream timestamp with millisecond precision (e.g. "1.320s").
#[must_use]
pub fn format_timestamp(t: Duration) -> String {
    format!("{:.3}s", t.as_secs_f64())
}

/// Formats per-action counts (e.g. "left 3, up 1"), or "none".
#[must_use]
pub fn format_action_counts(counts: &BTreeMap<Action, u64>) -> String {
    if counts.is_empty() {
        return "none".to_owned();
    }
    counts
        .iter()
        .map(|(action, n)| format!("{action} {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints the end-of-run summary to stderr.
pub fn print_summary(summary: &RunSummary) {
    eprintln!();
    let status = if summary.quit_requested {
        "stopped by user"
    } else {
        "source ended"
    };
    eprintln!("  {GREEN}{BOLD}Done{RESET} {DIM}({status}){RESET}");
    eprintln!("    frames:   {}", summary.frames_processed);
    if summary.frames_skipped > 0 {
        eprintln!("    skipped:  {YELLOW}{}{RESET}", summary.frames_skipped);
    }
    if summary.collaborator_failures > 0 {
        eprintln!("    failures: {YELLOW}{}{RESET}", summary.collaborator_failures);
    }
    eprintln!(
        "    actions:  {} {DIM}({}){RESET}",
        summary.actions_emitted(),
        format_action_counts(&summary.actions)
    );
}
