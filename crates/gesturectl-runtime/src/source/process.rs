//! Landmark helper subprocess.
//!
//! Runs an external program that owns the camera and the hand model
//! (for example a small MediaPipe script) and reads its stdout as a
//! JSON Lines trace. Detection thresholds are handed over through
//! environment variables. The child is killed when the source is dropped.

use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, Stdio};

use gesturectl_common::config::DetectionConfig;
use gesturectl_common::constants::{
    ENV_MAX_HANDS, ENV_MIN_DETECTION_CONFIDENCE, ENV_MIN_TRACKING_CONFIDENCE,
};
use gesturectl_common::error::{GesturectlError, Result};

use super::FrameSource;
use super::trace::TraceSource;
use crate::frame::Frame;

/// Frames streamed from a landmark helper process.
#[derive(Debug)]
pub struct ProcessSource {
    child: Child,
    trace: TraceSource<BufReader<ChildStdout>>,
}

impl ProcessSource {
    /// Spawns `program` with `args`, passing the detection settings in its environment.
    ///
    /// The helper's stderr goes to `stderr`; pass [`Stdio::null`] while a
    /// terminal UI owns the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started.
    pub fn spawn(
        program: &str,
        args: &[String],
        detection: &DetectionConfig,
        stderr: Stdio,
    ) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .env(
                ENV_MIN_DETECTION_CONFIDENCE,
                detection.min_detection_confidence.to_string(),
            )
            .env(
                ENV_MIN_TRACKING_CONFIDENCE,
                detection.min_tracking_confidence.to_string(),
            )
            .env(ENV_MAX_HANDS, detection.max_hands.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .spawn()
            .map_err(|e| GesturectlError::Io {
                path: program.into(),
                source: e,
            })?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(GesturectlError::Detector {
                message: format!("stdout of {program} was not captured"),
            });
        };
        tracing::info!(program, pid = child.id(), "landmark helper started");

        Ok(Self {
            child,
            trace: TraceSource::new(BufReader::new(stdout), program),
        })
    }

    /// OS process id of the helper.
    #[must_use]
    pub fn pid(&self) -> u32 {
        self.child.id()
    }
}

impl FrameSource for ProcessSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let frame = self.trace.next_frame()?;
        if frame.is_none() {
            match self.child.try_wait() {
                Ok(Some(status)) => tracing::info!(%status, "landmark helper exited"),
                Ok(None) => tracing::info!("landmark helper closed its output"),
                Err(e) => tracing::warn!(error = %e, "cannot query landmark helper status"),
            }
        }
        Ok(frame)
    }
}

impl Drop for ProcessSource {
    fn drop(&mut self) {
        if matches!(self.child.try_wait(), Ok(None)) {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
        tracing::debug!(pid = self.child.id(), "landmark helper reaped");
    }
}
