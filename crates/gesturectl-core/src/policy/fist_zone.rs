//! Fist override on top of zone pointing.

use gesturectl_common::types::{Action, HandLandmarks, landmark};

use super::{FrameObservation, GesturePolicy};
use crate::primitives::fist::is_fist_closed;
use crate::primitives::trigger::edge_trigger;
use crate::primitives::zone::{ZoneLayout, classify_zone};
use crate::state::{ClassifierState, Decision};

/// A closed fist means down; otherwise the index fingertip points
/// left, right, or up. Down is never produced by position.
///
/// Uses the same rising-edge rule as [`ZonePolicy`](super::ZonePolicy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FistZonePolicy;

impl FistZonePolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn classify_hand(hand: &HandLandmarks, width: u32, height: u32) -> Action {
        if is_fist_closed(hand) {
            return Action::Down;
        }
        let tip = hand.pixel(landmark::INDEX_TIP, width, height);
        classify_zone(tip, width, height, ZoneLayout::WithoutDown)
    }
}

impl GesturePolicy for FistZonePolicy {
    fn name(&self) -> &'static str {
        "fist-zone"
    }

    fn step(&self, state: &ClassifierState, observation: &FrameObservation<'_>) -> Decision {
        let action = observation
            .hands
            .iter()
            .rev()
            .map(|hand| Self::classify_hand(hand, observation.width, observation.height))
            .find(|action| !action.is_neutral())
            .unwrap_or(Action::Neutral);

        let (emit, last_action) = edge_trigger(state.last_action, action);
        Decision {
            action,
            emit,
            state: ClassifierState {
                last_action,
                ..*state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fist_at, observe, pointing_at};

    fn step_once(state: &ClassifierState, hands: &[HandLandmarks]) -> Decision {
        FistZonePolicy::new().step(state, &observe(hands, 0))
    }

    #[test]
    fn fist_is_down_wherever_the_hand_is() {
        for (x, y) in [(0.05, 0.5), (0.95, 0.5), (0.5, 0.05), (0.5, 0.5), (0.5, 0.95)] {
            let decision = step_once(&ClassifierState::new(), &[fist_at(x, y)]);
            assert_eq!(decision.emit, Some(Action::Down), "fist at ({x}, {y})");
        }
    }

    #[test]
    fn open_hand_uses_three_zones() {
        let state = ClassifierState::new();
        assert_eq!(step_once(&state, &[pointing_at(0.05, 0.5)]).emit, Some(Action::Left));
        assert_eq!(step_once(&state, &[pointing_at(0.95, 0.5)]).emit, Some(Action::Right));
        assert_eq!(step_once(&state, &[pointing_at(0.5, 0.05)]).emit, Some(Action::Up));
        assert_eq!(step_once(&state, &[pointing_at(0.5, 0.95)]).emit, None);
    }

    #[test]
    fn held_fist_fires_once() {
        let hands = [fist_at(0.5, 0.5)];
        let first = step_once(&ClassifierState::new(), &hands);
        let second = step_once(&first.state, &hands);
        assert_eq!(first.emit, Some(Action::Down));
        assert_eq!(second.emit, None);
        assert_eq!(second.action, Action::Down);
    }

    #[test]
    fn opening_the_fist_in_center_re_arms_down() {
        let fist = [fist_at(0.5, 0.5)];
        let open = [pointing_at(0.5, 0.5)];
        let a = step_once(&ClassifierState::new(), &fist);
        let b = step_once(&a.state, &open);
        let c = step_once(&b.state, &fist);
        assert_eq!(b.emit, None);
        assert_eq!(b.state.last_action, Action::Neutral);
        assert_eq!(c.emit, Some(Action::Down));
    }

    #[test]
    fn no_hand_resets_to_neutral() {
        let state = ClassifierState {
            last_action: Action::Down,
            ..ClassifierState::new()
        };
        let decision = step_once(&state, &[]);
        assert_eq!(decision.action, Action::Neutral);
        assert_eq!(decision.emit, None);
        assert_eq!(decision.state.last_action, Action::Neutral);
    }
}
