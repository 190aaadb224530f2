//! System-wide constants and defaults.

/// Number of landmarks the hand-landmark model reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Default minimum score for a hand detection to be accepted.
pub const DEFAULT_MIN_DETECTION_CONFIDENCE: f32 = 0.7;

/// Default minimum score for frame-to-frame hand tracking.
pub const DEFAULT_MIN_TRACKING_CONFIDENCE: f32 = 0.5;

/// Default upper bound on hands reported per frame.
pub const DEFAULT_MAX_HANDS: usize = 2;

/// Default wrist displacement, in pixels, that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Default minimum delay, in seconds, between repeated held-gesture actions.
pub const DEFAULT_COOLDOWN_SECS: f64 = 0.3;

/// Default display upscale, in percent of the captured frame size.
pub const DEFAULT_SCALE_PERCENT: u32 = 120;

/// Default pause before the control loop starts, in seconds.
pub const DEFAULT_STARTUP_DELAY_SECS: f64 = 3.0;

/// Title shown by the renderer.
pub const DEFAULT_WINDOW_TITLE: &str = "Hand Gesture Controller";

/// Environment variable carrying the detection threshold to a landmark helper.
pub const ENV_MIN_DETECTION_CONFIDENCE: &str = "GESTURECTL_MIN_DETECTION_CONFIDENCE";

/// Environment variable carrying the tracking threshold to a landmark helper.
pub const ENV_MIN_TRACKING_CONFIDENCE: &str = "GESTURECTL_MIN_TRACKING_CONFIDENCE";

/// Environment variable carrying the hand limit to a landmark helper.
pub const ENV_MAX_HANDS: &str = "GESTURECTL_MAX_HANDS";

/// Application name used in CLI output.
pub const APP_NAME: &str = "gesturectl";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "gesturectl";
