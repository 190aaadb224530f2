//! Closed-fist detection.
//!
//! A finger counts as curled when its tip sits lower in the frame than its
//! middle knuckle. Image `y` grows downward, so lower means a larger `y`.

use gesturectl_common::types::{HandLandmarks, landmark};

/// Returns `true` if the fingertip at `tip` is below the knuckle at `pip`.
#[must_use]
pub fn is_finger_curled(hand: &HandLandmarks, tip: usize, pip: usize) -> bool {
    hand.point(tip).y > hand.point(pip).y
}

/// Returns `true` when both the index and middle fingers are curled.
#[must_use]
pub fn is_fist_closed(hand: &HandLandmarks) -> bool {
    is_finger_curled(hand, landmark::INDEX_TIP, landmark::INDEX_PIP)
        && is_finger_curled(hand, landmark::MIDDLE_TIP, landmark::MIDDLE_PIP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fist_at, pointing_at};

    #[test]
    fn curled_index_and_middle_is_a_fist() {
        assert!(is_fist_closed(&fist_at(0.5, 0.5)));
    }

    #[test]
    fn extended_fingers_are_not_a_fist() {
        assert!(!is_fist_closed(&pointing_at(0.5, 0.5)));
    }

    #[test]
    fn one_curled_finger_is_not_enough() {
        let mut hand = pointing_at(0.5, 0.5);
        let pip = hand.point(landmark::INDEX_PIP);
        hand.landmarks[landmark::INDEX_TIP].y = pip.y + 0.05;
        assert!(is_finger_curled(&hand, landmark::INDEX_TIP, landmark::INDEX_PIP));
        assert!(!is_fist_closed(&hand));
    }

    #[test]
    fn tip_level_with_knuckle_is_not_curled() {
        let mut hand = fist_at(0.5, 0.5);
        let pip = hand.point(landmark::MIDDLE_PIP);
        hand.landmarks[landmark::MIDDLE_TIP].y = pip.y;
        assert!(!is_fist_closed(&hand));
    }
}
