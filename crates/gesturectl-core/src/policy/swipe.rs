//! Fist repeat plus velocity-based swipes.
//!
//! Only the first reported hand is tracked. A closed fist emits down at
//! most once per cooldown for as long as it is held. With the hand open,
//! the wrist's per-frame displacement is compared against a pixel
//! threshold: a fast horizontal move emits left or right, a fast upward
//! move emits up. A latch stops one swipe from firing on every frame it
//! stays fast; it re-arms once the wrist slows below the threshold.

use std::time::Duration;

use gesturectl_common::config::ClassifierConfig;
use gesturectl_common::types::{Action, PixelPoint, landmark};

use super::{FrameObservation, GesturePolicy};
use crate::primitives::fist::is_fist_closed;
use crate::primitives::trigger::cooldown_elapsed;
use crate::state::{ClassifierState, Decision};

/// Fist + swipe policy tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipePolicy {
    /// Per-frame wrist displacement, in pixels, above which a move is a swipe.
    pub threshold_px: f32,
    /// Minimum time between emissions while a fist is held.
    pub cooldown: Duration,
    /// Drop the previous wrist position on frames without a hand.
    pub reset_on_detection_gap: bool,
}

impl SwipePolicy {
    /// Creates the policy with explicit tuning.
    #[must_use]
    pub const fn new(threshold_px: f32, cooldown: Duration) -> Self {
        Self {
            threshold_px,
            cooldown,
            reset_on_detection_gap: false,
        }
    }

    /// Sets whether a detection gap clears swipe tracking.
    #[must_use]
    pub const fn reset_on_detection_gap(mut self, reset: bool) -> Self {
        self.reset_on_detection_gap = reset;
        self
    }

    /// Builds the policy from the classifier section of the config.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.swipe_threshold_px, config.cooldown())
            .reset_on_detection_gap(config.reset_on_detection_gap)
    }

    fn fist(&self, state: &ClassifierState, now: Duration) -> Decision {
        let mut next = *state;
        let mut emit = None;
        if cooldown_elapsed(state.last_emitted_at, now, self.cooldown) {
            emit = Some(Action::Down);
            next.last_action = Action::Down;
            next.last_emitted_at = Some(now);
        }
        Decision {
            action: Action::Down,
            emit,
            state: next,
        }
    }

    fn swipe(&self, state: &ClassifierState, wrist: PixelPoint, now: Duration) -> Decision {
        let mut next = ClassifierState {
            previous_wrist: Some(wrist),
            ..*state
        };
        let Some(previous) = state.previous_wrist else {
            return Decision::idle(next);
        };

        let dx = f64::from(wrist.x) - f64::from(previous.x);
        let dy = f64::from(wrist.y) - f64::from(previous.y);
        let threshold = f64::from(self.threshold_px);

        if dx.abs() <= threshold && dy.abs() <= threshold {
            next.gesture_latched = false;
            return Decision::idle(next);
        }
        if state.gesture_latched {
            return Decision::idle(next);
        }

        let action = if dx.abs() > dy.abs() {
            if dx > 0.0 { Action::Right } else { Action::Left }
        } else if dy < 0.0 {
            Action::Up
        } else {
            // Downward swipes are reserved for the fist.
            Action::Neutral
        };
        if action.is_neutral() {
            return Decision::idle(next);
        }

        tracing::trace!(dx, dy, %action, "swipe detected");
        next.gesture_latched = true;
        next.last_action = action;
        next.last_emitted_at = Some(now);
        Decision {
            action,
            emit: Some(action),
            state: next,
        }
    }
}

impl Default for SwipePolicy {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl GesturePolicy for SwipePolicy {
    fn name(&self) -> &'static str {
        "swipe"
    }

    fn step(&self, state: &ClassifierState, observation: &FrameObservation<'_>) -> Decision {
        let Some(hand) = observation.hands.first() else {
            let mut next = *state;
            if self.reset_on_detection_gap {
                next.previous_wrist = None;
            }
            return Decision::idle(next);
        };

        if is_fist_closed(hand) {
            return self.fist(state, observation.timestamp);
        }

        let wrist = hand.pixel(landmark::WRIST, observation.width, observation.height);
        self.swipe(state, wrist, observation.timestamp)
    }

    fn hand_limit(&self) -> Option<usize> {
        Some(1)
    }
}
