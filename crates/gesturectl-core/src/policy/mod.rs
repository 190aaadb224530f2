//! Gesture classification policies.
//!
//! Every policy implements [`GesturePolicy`]: a pure step from the
//! previous [`ClassifierState`] and one [`FrameObservation`] to a
//! [`Decision`]. Policies hold only their tuning, never frame state.

pub mod fist_zone;
pub mod swipe;
pub mod zone;

use std::time::Duration;

use gesturectl_common::types::HandLandmarks;

use crate::state::{ClassifierState, Decision};

pub use fist_zone::FistZonePolicy;
pub use swipe::SwipePolicy;
pub use zone::ZonePolicy;

/// Everything a policy sees about one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameObservation<'a> {
    /// Hands reported by the detector, in detector order. May be empty.
    pub hands: &'a [HandLandmarks],
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Capture time relative to the start of the stream.
    pub timestamp: Duration,
}

impl FrameObservation<'_> {
    /// Returns `true` when the detector found no hand.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// A gesture classification strategy.
pub trait GesturePolicy {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Classifies one frame.
    ///
    /// Must not mutate anything: calling it twice with the same inputs
    /// yields the same [`Decision`].
    fn step(&self, state: &ClassifierState, observation: &FrameObservation<'_>) -> Decision;

    /// Largest number of hands this policy looks at, if it limits them.
    fn hand_limit(&self) -> Option<usize> {
        None
    }
}
