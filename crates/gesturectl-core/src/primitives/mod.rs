//! Building blocks shared by the classification policies.
//!
//! - [`zone`]: which third of the frame a point falls in.
//! - [`fist`]: whether a hand is curled into a fist.
//! - [`trigger`]: rising-edge and cooldown gating of emitted actions.

pub mod fist;
pub mod trigger;
pub mod zone;
