//! # gesturectl-core
//!
//! The gesture classifier: maps one frame's detected hands plus the
//! retained [`ClassifierState`](state::ClassifierState) to at most one
//! action to dispatch and the successor state.
//!
//! Three interchangeable policies share the same interface:
//! - **Zone**: index fingertip in the left/right/top/bottom third of the frame.
//! - **Fist + zone**: a closed fist presses down, otherwise left/right/up zones.
//! - **Fist + swipe**: a held fist repeats down on a cooldown, wrist swipes
//!   press left/right/up.
//!
//! Stepping is a pure function over explicit state; no I/O happens here.

pub mod classifier;
pub mod policy;
pub mod primitives;
pub mod state;

pub use classifier::{Classifier, GestureClassifier};
pub use policy::{FrameObservation, GesturePolicy};
pub use state::{ClassifierState, Decision};

#[cfg(test)]
mod test_utils;
