//! `gesturectl run`: drive the keyboard from live hand landmarks.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use anyhow::anyhow;
use clap::Args;
use gesturectl_common::config::{ErrorPolicy, GesturectlConfig};
use gesturectl_common::types::PolicyKind;
use gesturectl_core::{GestureClassifier, GesturePolicy};
use gesturectl_runtime::Controller;
use gesturectl_runtime::detector::TraceDetector;
use gesturectl_runtime::dispatch::{KeyDispatcher, LogDispatcher};
use gesturectl_runtime::render::{HeadlessRenderer, Renderer};
use gesturectl_runtime::source::{FrameSource, ProcessSource, TraceSource};
use gesturectl_tui::TuiRenderer;

use crate::output::{self, BOLD, DIM, RESET};

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Read landmarks from a JSON Lines trace; "-" or nothing reads stdin.
    #[arg(long, value_name = "FILE", conflicts_with = "exec")]
    pub trace: Option<PathBuf>,

    /// Spawn a landmark helper and read its stdout.
    #[arg(long, value_name = "CMD", num_args = 1..)]
    pub exec: Vec<String>,

    /// Gesture policy, overriding the configuration.
    #[arg(long)]
    pub policy: Option<PolicyKind>,

    /// Log actions instead of pressing keys.
    #[arg(long)]
    pub dry_run: bool,

    /// Run without the terminal UI; stop with Ctrl+C.
    #[arg(long)]
    pub headless: bool,

    /// Seconds to wait before starting, overriding the configuration.
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// Mirror landmarks horizontally.
    #[arg(long)]
    pub mirror: bool,

    /// Stop on the first detector, dispatch, or render failure.
    #[arg(long)]
    pub abort_on_error: bool,
}

impl RunArgs {
    /// Helper stderr is discarded while the terminal UI owns the screen.
    const fn keeps_helper_stderr(&self) -> bool {
        self.headless
    }

    fn helper_stderr(&self) -> Stdio {
        if self.keeps_helper_stderr() {
            Stdio::inherit()
        } else {
            Stdio::null()
        }
    }

    fn reads_stdin(&self) -> bool {
        self.exec.is_empty() && self.trace.as_deref().is_none_or(|p| p == Path::new("-"))
    }

    /// Applies command-line overrides and re-validates.
    fn apply(&self, mut config: GesturectlConfig) -> anyhow::Result<GesturectlConfig> {
        if let Some(policy) = self.policy {
            config.classifier.policy = policy;
        }
        if let Some(delay) = self.delay {
            config.runtime.startup_delay_secs = delay;
        }
        if self.mirror {
            config.detection.mirror = true;
        }
        if self.abort_on_error {
            config.runtime.on_collaborator_error = ErrorPolicy::Abort;
        }
        config.validate().map_err(|e| anyhow!("{e}"))?;
        Ok(config)
    }
}

/// Executes the `run` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a collaborator cannot
/// be set up, or the loop stops on a failure.
pub fn execute(args: &RunArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = args.apply(super::load_config(config_path)?)?;
    if !args.headless && args.reads_stdin() {
        anyhow::bail!(
            "reading landmarks from stdin needs --headless; pass --trace <file> or --exec <cmd>"
        );
    }

    let classifier = GestureClassifier::from_config(&config.classifier);
    tracing::info!(
        policy = %config.classifier.policy,
        cooldown_secs = config.classifier.cooldown_secs,
        on_error = ?config.runtime.on_collaborator_error,
        "classifier configured"
    );
    let detector = TraceDetector::from_config(&config.detection)
        .limit_hands(classifier.policy().hand_limit());
    let dispatcher = key_dispatcher(args.dry_run)?;
    tracing::info!(dry_run = args.dry_run, "key dispatcher selected");

    print_header(&config, args.dry_run);
    countdown(config.runtime.startup_delay());

    let source = frame_source(args, &config)?;
    let renderer: Box<dyn Renderer> = if args.headless {
        Box::new(HeadlessRenderer::with_ctrlc().map_err(|e| anyhow!("{e}"))?)
    } else {
        Box::new(TuiRenderer::new(&config.display).map_err(|e| anyhow!("{e}"))?)
    };
    tracing::info!(headless = args.headless, "renderer selected");

    let mut controller = Controller::new(source, detector, dispatcher, renderer, classifier)
        .with_error_policy(config.runtime.on_collaborator_error);
    let result = controller.run();
    // Restores the terminal before anything is printed.
    drop(controller);

    let summary = result.map_err(|e| anyhow!("{e}"))?;
    tracing::debug!(
        frames = summary.frames_processed,
        actions = summary.actions_emitted(),
        failures = summary.collaborator_failures,
        "run finished"
    );
    output::print_summary(&summary);
    Ok(())
}

fn frame_source(args: &RunArgs, config: &GesturectlConfig) -> anyhow::Result<Box<dyn FrameSource>> {
    if let Some((program, rest)) = args.exec.split_first() {
        tracing::info!(program, args = ?rest, "frame source: landmark helper");
        let source = ProcessSource::spawn(program, rest, &config.detection, args.helper_stderr())
            .map_err(|e| anyhow!("{e}"))?;
        return Ok(Box::new(source));
    }
    match args.trace.as_deref() {
        Some(path) if path != Path::new("-") => {
            tracing::info!(path = %path.display(), "frame source: trace file");
            Ok(Box::new(TraceSource::open(path).map_err(|e| anyhow!("{e}"))?))
        }
        _ => {
            tracing::info!("frame source: stdin");
            Ok(Box::new(TraceSource::new(std::io::stdin().lock(), "<stdin>")))
        }
    }
}

fn key_dispatcher(dry_run: bool) -> anyhow::Result<Box<dyn KeyDispatcher>> {
    if dry_run {
        return Ok(Box::new(LogDispatcher::new()));
    }
    keyboard_dispatcher()
}

#[cfg(feature = "keyboard")]
fn keyboard_dispatcher() -> anyhow::Result<Box<dyn KeyDispatcher>> {
    let keyboard = gesturectl_runtime::dispatch::KeyboardDispatcher::new()
        .map_err(|e| anyhow!("{e}"))?;
    Ok(Box::new(keyboard))
}

#[cfg(not(feature = "keyboard"))]
fn keyboard_dispatcher() -> anyhow::Result<Box<dyn KeyDispatcher>> {
    anyhow::bail!("this build cannot press keys; rebuild with `--features keyboard` or pass --dry-run")
}

fn print_header(config: &GesturectlConfig, dry_run: bool) {
    eprintln!();
    eprintln!("  {BOLD}gesturectl{RESET} {DIM}v{}{RESET}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  policy {BOLD}{}{RESET} {DIM}({}){RESET}",
        config.classifier.policy,
        config.classifier.policy.description()
    );
    if dry_run {
        eprintln!("  {DIM}dry run: actions are logged, no keys are pressed{RESET}");
    }
}

fn countdown(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    eprintln!("  Focus the game window...");
    let mut remaining = delay;
    while !remaining.is_zero() {
        let step = remaining.min(Duration::from_secs(1));
        eprintln!("  {DIM}starting in {:.0}s{RESET}", remaining.as_secs_f64().ceil());
        std::thread::sleep(step);
        remaining -= step;
    }
}
