//! Emission gating: rising-edge triggers and cooldowns.

use std::time::Duration;

use gesturectl_common::types::Action;

/// Applies the rising-edge rule to the frame's `current` action.
///
/// Returns the action to emit (if any) and the new latched action. A
/// non-neutral action fires only when it differs from `last`; a neutral
/// frame resets the latch so the next occurrence fires again.
#[must_use]
pub fn edge_trigger(last: Action, current: Action) -> (Option<Action>, Action) {
    if current.is_neutral() {
        (None, Action::Neutral)
    } else if current == last {
        (None, last)
    } else {
        (Some(current), current)
    }
}

/// Returns `true` when at least `cooldown` has passed since `last_emitted_at`.
///
/// Nothing emitted yet always counts as elapsed.
#[must_use]
pub fn cooldown_elapsed(last_emitted_at: Option<Duration>, now: Duration, cooldown: Duration) -> bool {
    last_emitted_at.is_none_or(|at| now.saturating_sub(at) >= cooldown)
}
