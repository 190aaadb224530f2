//! Captured frames.

use std::time::Duration;

use gesturectl_common::types::HandLandmarks;

/// One frame delivered by a [`FrameSource`](crate::source::FrameSource).
///
/// Landmark helpers run the hand model next to the camera, so a frame
/// carries the helper's raw hand landmarks instead of pixels. The
/// [`HandDetector`](crate::detector::HandDetector) decides which of them
/// reach the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sequence number within the stream, starting at 0.
    pub index: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Capture time relative to the start of the stream.
    pub timestamp: Duration,
    /// Hands reported with the frame, unfiltered.
    pub hands: Vec<HandLandmarks>,
}
