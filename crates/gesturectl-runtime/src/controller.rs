//! The frame loop.
//!
//! Per frame: acquire → detect → classify → dispatch → render. Lost
//! frames are skipped. Detector, dispatcher, and renderer failures all go
//! through one [`ErrorPolicy`]: log and carry on, or stop the loop.

use std::collections::BTreeMap;

use gesturectl_common::config::ErrorPolicy;
use gesturectl_common::error::{GesturectlError, Result};
use gesturectl_common::types::Action;
use gesturectl_core::{FrameObservation, GestureClassifier, GesturePolicy};
use serde::Serialize;

use crate::detector::HandDetector;
use crate::dispatch::KeyDispatcher;
use crate::frame::Frame;
use crate::render::{RenderContext, RenderControl, Renderer};
use crate::source::FrameSource;

/// Counters collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Frames that went through the classifier.
    pub frames_processed: u64,
    /// Frames the source could not deliver or the detector failed on.
    pub frames_skipped: u64,
    /// Collaborator failures tolerated under [`ErrorPolicy::Continue`].
    pub collaborator_failures: u64,
    /// Successfully dispatched actions, per action.
    pub actions: BTreeMap<Action, u64>,
    /// Whether the run ended because the user quit.
    pub quit_requested: bool,
}

impl RunSummary {
    /// Total successfully dispatched actions.
    #[must_use]
    pub fn actions_emitted(&self) -> u64 {
        self.actions.values().sum()
    }

    fn record(&mut self, action: Action) {
        *self.actions.entry(action).or_insert(0) += 1;
    }
}

/// Owns the collaborators and the classifier, and drives them frame by frame.
#[derive(Debug)]
pub struct Controller<S, D, K, R> {
    source: S,
    detector: D,
    dispatcher: K,
    renderer: R,
    classifier: GestureClassifier,
    on_error: ErrorPolicy,
}

impl<S, D, K, R> Controller<S, D, K, R>
where
    S: FrameSource,
    D: HandDetector,
    K: KeyDispatcher,
    R: Renderer,
{
    /// Assembles a controller that tolerates collaborator failures.
    pub const fn new(
        source: S,
        detector: D,
        dispatcher: K,
        renderer: R,
        classifier: GestureClassifier,
    ) -> Self {
        Self {
            source,
            detector,
            dispatcher,
            renderer,
            classifier,
            on_error: ErrorPolicy::Continue,
        }
    }

    /// Sets how detector, dispatcher, and renderer failures are handled.
    #[must_use]
    pub const fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Runs until the source ends or the renderer reports a quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame source fails outright, or if a
    /// collaborator fails under [`ErrorPolicy::Abort`].
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        tracing::info!(
            policy = self.classifier.policy().name(),
            on_error = ?self.on_error,
            "gesture control loop started"
        );

        loop {
            let frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    tracing::info!("frame source exhausted");
                    break;
                }
                Err(GesturectlError::FrameUnavailable { reason }) => {
                    tracing::warn!(%reason, "ignoring empty camera frame");
                    summary.frames_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.process(&frame, &mut summary)? == RenderControl::Quit {
                tracing::info!(frame = frame.index, "quit requested");
                summary.quit_requested = true;
                break;
            }
        }

        tracing::info!(
            frames = summary.frames_processed,
            skipped = summary.frames_skipped,
            actions = summary.actions_emitted(),
            "gesture control loop finished"
        );
        Ok(summary)
    }

    fn process(&mut self, frame: &Frame, summary: &mut RunSummary) -> Result<RenderControl> {
        let hands = match self.detector.detect(frame) {
            Ok(hands) => hands,
            Err(e) => {
                self.tolerate(e, summary)?;
                summary.frames_skipped += 1;
                return Ok(RenderControl::Continue);
            }
        };

        let decision = self.classifier.classify(&FrameObservation {
            hands: &hands,
            width: frame.width,
            height: frame.height,
            timestamp: frame.timestamp,
        });
        summary.frames_processed += 1;

        let mut dispatched = None;
        if let Some(action) = decision.emit {
            match self.dispatcher.press(action) {
                Ok(()) => {
                    summary.record(action);
                    dispatched = Some(action);
                }
                Err(e) => self.tolerate(e, summary)?,
            }
        }

        let ctx = RenderContext {
            frame,
            hands: &hands,
            decision: &decision,
            dispatched,
            policy: self.classifier.policy().kind(),
        };
        match self.renderer.render(&ctx) {
            Ok(control) => Ok(control),
            Err(e) => {
                self.tolerate(e, summary)?;
                Ok(RenderControl::Continue)
            }
        }
    }

    fn tolerate(&self, err: GesturectlError, summary: &mut RunSummary) -> Result<()> {
        match self.on_error {
            ErrorPolicy::Continue => {
                tracing::warn!(error = %err, "collaborator failed, continuing");
                summary.collaborator_failures += 1;
                Ok(())
            }
            ErrorPolicy::Abort => {
                tracing::error!(error = %err, "collaborator failed, stopping");
                Err(err)
            }
        }
    }

    /// The key dispatcher.
    pub const fn dispatcher(&self) -> &K {
        &self.dispatcher
    }

    /// The renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The classifier and its current state.
    pub const fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Releases the collaborators, returning the dispatcher and renderer.
    pub fn into_parts(self) -> (K, R) {
        (self.dispatcher, self.renderer)
    }
}
