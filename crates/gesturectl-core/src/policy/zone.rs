//! Static zone pointing.

use gesturectl_common::types::{Action, landmark};

use super::{FrameObservation, GesturePolicy};
use crate::primitives::trigger::edge_trigger;
use crate::primitives::zone::{ZoneLayout, classify_zone};
use crate::state::{ClassifierState, Decision};

/// Points the index fingertip into one of four edge zones.
///
/// Each direction fires once per visit to its zone; the hand has to pass
/// through the neutral center (or lose detection) before the same
/// direction fires again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZonePolicy;

impl ZonePolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GesturePolicy for ZonePolicy {
    fn name(&self) -> &'static str {
        "zone"
    }

    fn step(&self, state: &ClassifierState, observation: &FrameObservation<'_>) -> Decision {
        // Later hands override earlier ones, but only when they hit a zone.
        let action = observation
            .hands
            .iter()
            .rev()
            .map(|hand| {
                let tip = hand.pixel(landmark::INDEX_TIP, observation.width, observation.height);
                classify_zone(tip, observation.width, observation.height, ZoneLayout::FourWay)
            })
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
