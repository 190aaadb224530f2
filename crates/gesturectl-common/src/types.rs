//! Domain primitive types used across the gesturectl workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::HAND_LANDMARK_COUNT;
use crate::error::GesturectlError;

/// Landmark indices in the hand-landmark model's reporting order.
pub mod landmark {
    /// Base of the palm.
    pub const WRIST: usize = 0;
    /// Thumb carpometacarpal joint.
    pub const THUMB_CMC: usize = 1;
    /// Thumb metacarpophalangeal joint.
    pub const THUMB_MCP: usize = 2;
    /// Thumb interphalangeal joint.
    pub const THUMB_IP: usize = 3;
    /// Thumb tip.
    pub const THUMB_TIP: usize = 4;
    /// Index finger knuckle.
    pub const INDEX_MCP: usize = 5;
    /// Index finger middle knuckle.
    pub const INDEX_PIP: usize = 6;
    /// Index finger distal joint.
    pub const INDEX_DIP: usize = 7;
    /// Index fingertip.
    pub const INDEX_TIP: usize = 8;
    /// Middle finger knuckle.
    pub const MIDDLE_MCP: usize = 9;
    /// Middle finger middle knuckle.
    pub const MIDDLE_PIP: usize = 10;
    /// Middle finger distal joint.
    pub const MIDDLE_DIP: usize = 11;
    /// Middle fingertip.
    pub const MIDDLE_TIP: usize = 12;
    /// Ring finger knuckle.
    pub const RING_MCP: usize = 13;
    /// Ring finger middle knuckle.
    pub const RING_PIP: usize = 14;
    /// Ring finger distal joint.
    pub const RING_DIP: usize = 15;
    /// Ring fingertip.
    pub const RING_TIP: usize = 16;
    /// Pinky knuckle.
    pub const PINKY_MCP: usize = 17;
    /// Pinky middle knuckle.
    pub const PINKY_PIP: usize = 18;
    /// Pinky distal joint.
    pub const PINKY_DIP: usize = 19;
    /// Pinky tip.
    pub const PINKY_TIP: usize = 20;
}

/// Bones drawn between landmarks when rendering a hand.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = {
    use landmark::*;
    [
        (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
        (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
        (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
        (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
        (RING_MCP, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
        (WRIST, PINKY_MCP),
    ]
};

/// A discrete control action derived from a hand pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// No key should be pressed this frame.
    Neutral,
    /// Up arrow (jump).
    Up,
    /// Down arrow (roll).
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

impl Action {
    /// The four actions that map to a key press.
    pub const DIRECTIONS: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns `true` for [`Action::Neutral`].
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Self::Neutral)
    }

    /// Name of the key this action presses, or `None` for neutral.
    #[must_use]
    pub const fn key_name(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Up => Some("up"),
            Self::Down => Some("down"),
            Self::Left => Some("left"),
            Self::Right => Some("right"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name().unwrap_or("neutral"))
    }
}

/// Which gesture classification policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Index fingertip position in a 3x3 grid of screen zones.
    #[default]
    Zone,
    /// Closed fist presses down, otherwise left/right/up zones.
    FistZone,
    /// Closed fist repeats down on a cooldown, wrist swipes press left/right/up.
    Swipe,
}

impl PolicyKind {
    /// Every selectable policy, in presentation order.
    pub const ALL: [Self; 3] = [Self::Zone, Self::FistZone, Self::Swipe];

    /// Stable identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::FistZone => "fist-zone",
            Self::Swipe => "swipe",
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Zone => "point the index finger into the left/right/top/bottom third of the frame",
            Self::FistZone => "close a fist to press down; point left/right/up with the index finger",
            Self::Swipe => "close a fist to repeat down; swipe the wrist left/right/up",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = GesturectlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GesturectlError::Config {
                message: format!("unknown policy \"{s}\" (expected zone, fist-zone or swipe)"),
            })
    }
}

/// A landmark in normalized frame coordinates.
///
/// `x` and `y` are in `[0, 1]` relative to the frame; `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0 at the left edge.
    pub x: f32,
    /// Vertical position, 0 at the top edge.
    pub y: f32,
    /// Depth relative to the wrist.
    pub z: f32,
}

impl Landmark {
    /// Creates a landmark from normalized coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Projects the landmark into pixel space, truncating toward zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_pixel(self, width: u32, height: u32) -> PixelPoint {
        PixelPoint {
            x: (self.x * width as f32) as i32,
            y: (self.y * height as f32) as i32,
        }
    }
}

/// A point in pixel coordinates of the captured frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the top edge.
    pub y: i32,
}

impl PixelPoint {
    /// Creates a pixel point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// All landmarks of one detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    /// Landmarks in model order (see [`landmark`]).
    pub landmarks: [Landmark; HAND_LANDMARK_COUNT],
    /// Detection score in `[0, 1]`.
    pub score: f32,
}

impl HandLandmarks {
    /// Creates a hand from a full landmark array.
    #[must_use]
    pub const fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT], score: f32) -> Self {
        Self { landmarks, score }
    }

    /// Builds a hand from a slice, rejecting anything but exactly 21 points.
    ///
    /// # Errors
    ///
    /// Returns [`GesturectlError::FrameUnavailable`] if the slice has the wrong length.
    pub fn from_slice(points: &[Landmark], score: f32) -> crate::error::Result<Self> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            points.try_into().map_err(|_| GesturectlError::FrameUnavailable {
                reason: format!(
                    "hand has {} landmarks, expected {HAND_LANDMARK_COUNT}",
                    points.len()
                ),
            })?;
        Ok(Self { landmarks, score })
    }

    /// Returns the landmark at `index`.
    ///
    /// Indices come from the [`landmark`] constants and are always in range.
    #[must_use]
    pub const fn point(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    /// Returns the landmark at `index` projected into pixel space.
    #[must_use]
    pub fn pixel(&self, index: usize, width: u32, height: u32) -> PixelPoint {
        self.landmarks[index].to_pixel(width, height)
    }

    /// Returns a horizontally mirrored copy (`x -> 1 - x`).
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut out = self.clone();
        for lm in &mut out.landmarks {
            lm.x = 1.0 - lm.x;
        }
        out
    }
}
