//! Frame sources.
//!
//! A source is pull-based and blocking: [`FrameSource::next_frame`] waits
//! for the next frame. `Ok(None)` means the stream ended;
//! [`GesturectlError::FrameUnavailable`](gesturectl_common::error::GesturectlError::FrameUnavailable)
//! means this frame was lost and the caller should simply ask again.

pub mod process;
pub mod trace;

use gesturectl_common::error::Result;

use crate::frame::Frame;

pub use process::ProcessSource;
pub use trace::TraceSource;

/// Supplies frames to the control loop.
pub trait FrameSource {
    /// Blocks until the next frame is available.
    ///
    /// # Errors
    ///
    /// Returns `FrameUnavailable` for a dropped or unreadable frame, or
    /// another error if the source itself has failed.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        (**self).next_frame()
    }
}
