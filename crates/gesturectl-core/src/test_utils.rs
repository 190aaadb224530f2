//! Hand fixtures for classifier tests.
//!
//! Frames are 1024 x 512 so pixel positions convert to normalized
//! coordinates without rounding.

use std::time::Duration;

use gesturectl_common::constants::HAND_LANDMARK_COUNT;
use gesturectl_common::types::{HandLandmarks, Landmark, landmark};

use crate::policy::FrameObservation;

pub const FRAME_W: u32 = 1024;
pub const FRAME_H: u32 = 512;

fn hand(index_tip: (f32, f32), wrist: (f32, f32), curled: bool) -> HandLandmarks {
    let mut points = [Landmark::new(wrist.0, wrist.1, 0.0); HAND_LANDMARK_COUNT];
    let (x, y) = index_tip;
    // Knuckles sit 0.05 below an extended tip, 0.05 above a curled one.
    let pip_offset = if curled { -0.05 } else { 0.05 };
    points[landmark::INDEX_TIP] = Landmark::new(x, y, 0.0);
    points[landmark::INDEX_PIP] = Landmark::new(x, y + pip_offset, 0.0);
    points[landmark::MIDDLE_TIP] = Landmark::new(x + 0.02, y, 0.0);
    points[landmark::MIDDLE_PIP] = Landmark::new(x + 0.02, y + pip_offset, 0.0);
    points[landmark::WRIST] = Landmark::new(wrist.0, wrist.1, 0.0);
    HandLandmarks::new(points, 0.95)
}

/// Open hand with the index fingertip at normalized `(x, y)`.
pub fn pointing_at(x: f32, y: f32) -> HandLandmarks {
    hand((x, y), (x, (y + 0.3).min(1.0)), false)
}

/// Open hand with the index fingertip at pixel `(x, y)` of the test frame.
#[allow(clippy::cast_precision_loss)]
pub fn pointing_at_px(x: i32, y: i32) -> HandLandmarks {
    pointing_at(x as f32 / FRAME_W as f32, y as f32 / FRAME_H as f32)
}

/// Closed fist with the index fingertip at normalized `(x, y)`.
pub fn fist_at(x: f32, y: f32) -> HandLandmarks {
    hand((x, y), (x, (y + 0.2).min(1.0)), true)
}

/// Open hand with the wrist at pixel `(x, y)` of the test frame.
#[allow(clippy::cast_precision_loss)]
pub fn open_hand_with_wrist_px(x: i32, y: i32) -> HandLandmarks {
    let wx = x as f32 / FRAME_W as f32;
    let wy = y as f32 / FRAME_H as f32;
    hand((wx, (wy - 0.3).max(0.0)), (wx, wy), false)
}

/// Closed fist with the wrist at pixel `(x, y)` of the test frame.
#[allow(clippy::cast_precision_loss)]
pub fn fist_with_wrist_px(x: i32, y: i32) -> HandLandmarks {
    let wx = x as f32 / FRAME_W as f32;
    let wy = y as f32 / FRAME_H as f32;
    hand((wx, (wy - 0.2).max(0.0)), (wx, wy), true)
}

/// Observation of `hands` on the test frame at `millis` since start.
pub fn observe(hands: &[HandLandmarks], millis: u64) -> FrameObservation<'_> {
    FrameObservation {
        hands,
        width: FRAME_W,
        height: FRAME_H,
        timestamp: Duration::from_millis(millis),
    }
}
