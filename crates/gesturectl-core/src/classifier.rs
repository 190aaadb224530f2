//! Policy selection and the stateful classifier wrapper.

use gesturectl_common::config::ClassifierConfig;
use gesturectl_common::types::PolicyKind;

use crate::policy::{FistZonePolicy, FrameObservation, GesturePolicy, SwipePolicy, ZonePolicy};
use crate::state::{ClassifierState, Decision};

/// One of the three policies, selected at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classifier {
    /// Static zone pointing.
    Zone(ZonePolicy),
    /// Fist override plus zone pointing.
    FistZone(FistZonePolicy),
    /// Fist repeat plus velocity swipes.
    Swipe(SwipePolicy),
}

impl Classifier {
    /// Builds the policy named in `config`.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        match config.policy {
            PolicyKind::Zone => Self::Zone(ZonePolicy::new()),
            PolicyKind::FistZone => Self::FistZone(FistZonePolicy::new()),
            PolicyKind::Swipe => Self::Swipe(SwipePolicy::from_config(config)),
        }
    }

    /// Which policy this is.
    #[must_use]
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Zone(_) => PolicyKind::Zone,
            Self::FistZone(_) => PolicyKind::FistZone,
            Self::Swipe(_) => PolicyKind::Swipe,
        }
    }

    fn policy(&self) -> &dyn GesturePolicy {
        match self {
            Self::Zone(p) => p,
            Self::FistZone(p) => p,
            Self::Swipe(p) => p,
        }
    }
}

impl GesturePolicy for Classifier {
    fn name(&self) -> &'static str {
        self.policy().name()
    }

    fn step(&self, state: &ClassifierState, observation: &FrameObservation<'_>) -> Decision {
        self.policy().step(state, observation)
    }

    fn hand_limit(&self) -> Option<usize> {
        self.policy().hand_limit()
    }
}

/// A policy together with the state it threads from frame to frame.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    policy: Classifier,
    state: ClassifierState,
}

impl GestureClassifier {
    /// Creates a classifier in the startup state.
    #[must_use]
    pub const fn new(policy: Classifier) -> Self {
        Self {
            policy,
            state: ClassifierState::new(),
        }
    }

    /// Builds the classifier selected by `config`.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(Classifier::from_config(config))
    }

    /// Classifies one frame and advances the retained state.
    pub fn classify(&mut self, observation: &FrameObservation<'_>) -> Decision {
        let decision = self.policy.step(&self.state, observation);
        if let Some(action) = decision.emit {
            tracing::debug!(policy = self.policy.name(), %action, "gesture recognised");
        }
        self.state = decision.state;
        decision
    }

    /// The active policy.
    #[must_use]
    pub const fn policy(&self) -> &Classifier {
        &self.policy
    }

    /// The state carried into the next frame.
    #[must_use]
    pub const fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Returns to the startup state.
    pub fn reset(&mut self) {
        self.state = ClassifierState::new();
    }
}
