//! `gesturectl classify`: replay a trace offline and list emitted actions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::anyhow;
use clap::Args;
use gesturectl_common::config::GesturectlConfig;
use gesturectl_common::error::Result;
use gesturectl_common::types::{Action, PolicyKind};
use gesturectl_core::{GestureClassifier, GesturePolicy};
use gesturectl_runtime::{Controller, RunSummary};
use gesturectl_runtime::detector::TraceDetector;
use gesturectl_runtime::dispatch::LogDispatcher;
use gesturectl_runtime::render::{RenderContext, RenderControl, Renderer};
use gesturectl_runtime::source::{FrameSource, TraceSource};
use serde::Serialize;

use crate::output::{format_action_counts, format_timestamp};

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON Lines landmark trace; "-" reads stdin.
    pub trace: PathBuf,

    /// Gesture policy, overriding the configuration.
    #[arg(long)]
    pub policy: Option<PolicyKind>,

    /// Print one JSON object per emitted action.
    #[arg(long)]
    pub json: bool,
}

/// One emitted action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emission {
    /// Frame index in the trace.
    pub frame: u64,
    /// Frame timestamp, in seconds.
    pub t: f64,
    #[serde(skip)]
    pub timestamp: Duration,
    /// The action.
    pub action: Action,
}

/// Collects emissions instead of drawing.
#[derive(Debug, Default)]
struct Recorder {
    emissions: Vec<Emission>,
}

impl Renderer for Recorder {
    fn render(&mut self, ctx: &RenderContext<'_>) -> Result<RenderControl> {
        if let Some(action) = ctx.dispatched {
            self.emissions.push(Emission {
                frame: ctx.frame.index,
                t: ctx.frame.timestamp.as_secs_f64(),
                timestamp: ctx.frame.timestamp,
                action,
            });
        }
        Ok(RenderControl::Continue)
    }
}

/// Executes the `classify` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the trace cannot be
/// read, or output fails.
pub fn execute(args: &ClassifyArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(policy) = args.policy {
        config.classifier.policy = policy;
    }

    tracing::info!(
        trace = %args.trace.display(),
        policy = %config.classifier.policy,
        json = args.json,
        "classifying trace"
    );
    let source: Box<dyn FrameSource> = if args.trace == Path::new("-") {
        Box::new(TraceSource::new(std::io::stdin().lock(), "<stdin>"))
    } else {
        Box::new(TraceSource::open(&args.trace).map_err(|e| anyhow!("{e}"))?)
    };
    let (emissions, summary) = classify(source, &config)?;

    let mut out = std::io::stdout().lock();
    if args.json {
        for emission in &emissions {
            serde_json::to_writer(&mut out, emission)?;
            writeln!(out)?;
        }
    } else {
        writeln!(out, "{:<8} {:<10} {}", "FRAME", "TIME", "ACTION")?;
        for e in &emissions {
            writeln!(
                out,
                "{:<8} {:<10} {}",
                e.frame,
                format_timestamp(e.timestamp),
                e.action
            )?;
        }
    }

    eprintln!(
        "{} frame(s), {} skipped, {} action(s): {}",
        summary.frames_processed,
        summary.frames_skipped,
        summary.actions_emitted(),
        format_action_counts(&summary.actions)
    );
    Ok(())
}

/// Runs the classifier over every frame of `source`.
fn classify(
    source: Box<dyn FrameSource>,
    config: &GesturectlConfig,
) -> anyhow::Result<(Vec<Emission>, RunSummary)> {
    let classifier = GestureClassifier::from_config(&config.classifier);
    let detector = TraceDetector::from_config(&config.detection)
        .limit_hands(classifier.policy().hand_limit());
    let mut controller = Controller::new(
        source,
        detector,
        LogDispatcher::new(),
        Recorder::default(),
        classifier,
    )
    .with_error_policy(config.runtime.on_collaborator_error);

    let summary = controller.run().map_err(|e| anyhow!("{e}"))?;
    let (_, recorder) = controller.into_parts();
    tracing::debug!(
        frames = summary.frames_processed,
        skipped = summary.frames_skipped,
        emissions = recorder.emissions.len(),
        "trace classified"
    );
    Ok((recorder.emissions, summary))
}
