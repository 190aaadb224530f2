//! Retained classifier state and the per-frame decision.

use std::time::Duration;

use gesturectl_common::types::{Action, PixelPoint};

/// State carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierState {
    /// Most recent action the edge trigger latched (zone policies) or emitted (swipe policy).
    pub last_action: Action,
    /// Wrist position on the previous open-hand frame.
    pub previous_wrist: Option<PixelPoint>,
    /// Set while a swipe is in progress; cleared once the wrist slows down.
    pub gesture_latched: bool,
    /// Timestamp of the last emitted action, anchoring the cooldown.
    pub last_emitted_at: Option<Duration>,
}

impl ClassifierState {
    /// The startup state: neutral, no wrist history, unlatched.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_action: Action::Neutral,
            previous_wrist: None,
            gesture_latched: false,
            last_emitted_at: None,
        }
    }
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// What the hand pose means this frame, before edge triggering.
    pub action: Action,
    /// The action to hand to the key dispatcher, if any. Never neutral.
    pub emit: Option<Action>,
    /// State to carry into the next frame.
    pub state: ClassifierState,
}

impl Decision {
    /// A frame that classified as neutral and emits nothing.
    #[must_use]
    pub const fn idle(state: ClassifierState) -> Self {
        Self {
            action: Action::Neutral,
            emit: None,
            state,
        }
    }
}
