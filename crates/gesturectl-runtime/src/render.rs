//! Frame rendering and quit detection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gesturectl_common::error::{GesturectlError, Result};
use gesturectl_common::types::{Action, HandLandmarks, PolicyKind};
use gesturectl_core::Decision;

use crate::frame::Frame;

/// Whether the loop should keep going after a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderControl {
    /// Process the next frame.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// Everything a renderer may draw for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The frame being shown.
    pub frame: &'a Frame,
    /// Hands the classifier saw.
    pub hands: &'a [HandLandmarks],
    /// What the classifier decided.
    pub decision: &'a Decision,
    /// The action actually pressed on this frame, if the dispatcher succeeded.
    pub dispatched: Option<Action>,
    /// Active policy, for zone overlays and labels.
    pub policy: PolicyKind,
}

/// Shows frames and owns the quit keystroke.
pub trait Renderer {
    /// Draws one frame and polls for a quit request.
    ///
    /// # Errors
    ///
    /// Returns [`GesturectlError::Render`] if drawing or input polling fails.
    fn render(&mut self, ctx: &RenderContext<'_>) -> Result<RenderControl>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&mut self, ctx: &RenderContext<'_>) -> Result<RenderControl> {
        (**self).render(ctx)
    }
}

/// Draws nothing; quits once its stop flag is raised.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    stop: Arc<AtomicBool>,
}

impl HeadlessRenderer {
    /// Creates a renderer whose stop flag is raised only through [`Self::stop_handle`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that quits on Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if the process-wide Ctrl+C handler cannot be installed.
    pub fn with_ctrlc() -> Result<Self> {
        let renderer = Self::new();
        let stop = renderer.stop_handle();
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)).map_err(|e| {
            GesturectlError::Render {
                message: format!("failed to set Ctrl+C handler: {e}"),
            }
        })?;
        Ok(renderer)
    }

    /// Shared flag; storing `true` ends the loop after the current frame.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, ctx: &RenderContext<'_>) -> Result<RenderControl> {
        tracing::trace!(
            frame = ctx.frame.index,
            hands = ctx.hands.len(),
            action = %ctx.decision.action,
            "frame processed"
        );
        if self.stop.load(Ordering::SeqCst) {
            Ok(RenderControl::Quit)
        } else {
            Ok(RenderControl::Continue)
        }
    }
}
