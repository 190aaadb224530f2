//! Hand detection.

use gesturectl_common::config::DetectionConfig;
use gesturectl_common::error::{GesturectlError, Result};
use gesturectl_common::types::HandLandmarks;

use crate::frame::Frame;

/// Finds hand landmarks in a frame.
pub trait HandDetector {
    /// Returns the hands in `frame`, possibly none.
    ///
    /// # Errors
    ///
    /// Returns [`GesturectlError::Detector`] if detection fails on this frame.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<HandLandmarks>>;
}

impl<T: HandDetector + ?Sized> HandDetector for Box<T> {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<HandLandmarks>> {
        (**self).detect(frame)
    }
}

/// Uses the landmarks a helper attached to the frame.
///
/// Applies the detection threshold to each hand's score, keeps the first
/// `max_hands` survivors in reported order, and optionally mirrors them
/// so that moving a hand right moves it right on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceDetector {
    min_detection_confidence: f32,
    max_hands: usize,
    mirror: bool,
}

impl TraceDetector {
    /// Creates a detector with explicit settings.
    #[must_use]
    pub const fn new(min_detection_confidence: f32, max_hands: usize, mirror: bool) -> Self {
        Self {
            min_detection_confidence,
            max_hands,
            mirror,
        }
    }

    /// Builds a detector from the detection section of the config.
    #[must_use]
    pub const fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.min_detection_confidence, config.max_hands, config.mirror)
    }

    /// Lowers the hand limit, e.g. for policies that track a single hand.
    #[must_use]
    pub fn limit_hands(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.max_hands = self.max_hands.min(limit);
        }
        self
    }

    /// Maximum hands passed on per frame.
    #[must_use]
    pub const fn max_hands(&self) -> usize {
        self.max_hands
    }
}

impl Default for TraceDetector {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}

impl HandDetector for TraceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<HandLandmarks>> {
        if let Some(bad) = frame
            .hands
            .iter()
            .flat_map(|hand| hand.landmarks.iter())
            .find(|lm| !lm.x.is_finite() || !lm.y.is_finite())
        {
            return Err(GesturectlError::Detector {
                message: format!(
                    "frame {} has a non-finite landmark ({}, {})",
                    frame.index, bad.x, bad.y
                ),
            });
        }

        let hands: Vec<HandLandmarks> = frame
            .hands
            .iter()
            .filter(|hand| hand.score >= self.min_detection_confidence)
            .take(self.max_hands)
            .map(|hand| if self.mirror { hand.mirrored() } else { hand.clone() })
            .collect();

        tracing::trace!(
            frame = frame.index,
            reported = frame.hands.len(),
            kept = hands.len(),
            "hands detected"
        );
        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gesturectl_common::constants::HAND_LANDMARK_COUNT;
    use gesturectl_common::types::{Landmark, landmark};

    use super::*;

    fn hand(x: f32, score: f32) -> HandLandmarks {
        HandLandmarks::new([Landmark::new(x, 0.5, 0.0); HAND_LANDMARK_COUNT], score)
    }

    fn frame(hands: Vec<HandLandmarks>) -> Frame {
        Frame {
            index: 7,
            width: 640,
            height: 480,
            timestamp: Duration::ZERO,
            hands,
        }
    }

    #[test]
    fn drops_low_confidence_hands() {
        let mut detector = TraceDetector::new(0.7, 2, false);
        let hands = detector
            .detect(&frame(vec![hand(0.1, 0.4), hand(0.2, 0.7), hand(0.3, 0.9)]))
            .expect("detect");
        assert_eq!(hands.len(), 2);
        assert!((hands[0].point(landmark::WRIST).x - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn keeps_first_hands_up_to_the_limit() {
        let mut detector = TraceDetector::new(0.0, 2, false).limit_hands(Some(1));
        assert_eq!(detector.max_hands(), 1);
        let hands = detector
            .detect(&frame(vec![hand(0.1, 1.0), hand(0.2, 1.0)]))
            .expect("detect");
        assert_eq!(hands.len(), 1);
        assert!((hands[0].point(landmark::WRIST).x - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn limit_never_raises_the_configured_maximum() {
        let detector = TraceDetector::new(0.0, 1, false).limit_hands(Some(4));
        assert_eq!(detector.max_hands(), 1);
    }

    #[test]
    fn mirrors_when_asked() {
        let mut detector = TraceDetector::new(0.0, 2, true);
        let hands = detector.detect(&frame(vec![hand(0.25, 1.0)])).expect("detect");
        assert!((hands[0].point(landmark::INDEX_TIP).x - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn no_hands_is_not_an_error() {
        let hands = TraceDetector::default().detect(&frame(Vec::new())).expect("detect");
        assert!(hands.is_empty());
    }

    #[test]
    fn non_finite_landmark_is_a_detector_error() {
        let err = TraceDetector::default()
            .detect(&frame(vec![hand(f32::NAN, 1.0)]))
            .unwrap_err();
        assert!(matches!(err, GesturectlError::Detector { .. }));
        assert!(err.to_string().contains("frame 7"), "got: {err}");
    }
}
