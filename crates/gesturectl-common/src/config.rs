//! Configuration model for the gesture controller.
//!
//! Loaded from a TOML file; every section and field falls back to its
//! default so partial files are accepted.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{GesturectlError, Result};
use crate::types::PolicyKind;

/// Root configuration for a gesturectl session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GesturectlConfig {
    /// Hand detector thresholds.
    pub detection: DetectionConfig,
    /// Gesture classification policy and tuning.
    pub classifier: ClassifierConfig,
    /// Renderer settings.
    pub display: DisplayConfig,
    /// Frame loop behaviour.
    pub runtime: RuntimeConfig,
}

/// Hand detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum score for a detected hand to be used.
    pub min_detection_confidence: f32,
    /// Minimum score for the detector to keep tracking a hand between frames.
    pub min_tracking_confidence: f32,
    /// Maximum number of hands handed to the classifier per frame.
    pub max_hands: usize,
    /// Mirror landmarks horizontally before classification.
    pub mirror: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: constants::DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: constants::DEFAULT_MIN_TRACKING_CONFIDENCE,
            max_hands: constants::DEFAULT_MAX_HANDS,
            mirror: false,
        }
    }
}

/// Gesture classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Active policy.
    pub policy: PolicyKind,
    /// Wrist displacement per frame, in pixels, that counts as a swipe.
    pub swipe_threshold_px: f32,
    /// Minimum delay between repeated held-fist actions, in seconds.
    pub cooldown_secs: f64,
    /// Forget the previous wrist position when no hand is detected.
    pub reset_on_detection_gap: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            swipe_threshold_px: constants::DEFAULT_SWIPE_THRESHOLD_PX,
            cooldown_secs: constants::DEFAULT_COOLDOWN_SECS,
            reset_on_detection_gap: false,
        }
    }
}

impl ClassifierConfig {
    /// Cooldown as a [`Duration`].
    ///
    /// Out-of-range values, which validation rejects, saturate.
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        secs_to_duration(self.cooldown_secs)
    }
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display size as a percentage of the captured frame.
    pub scale_percent: u32,
    /// Title shown above the preview.
    pub window_title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale_percent: constants::DEFAULT_SCALE_PERCENT,
            window_title: constants::DEFAULT_WINDOW_TITLE.to_owned(),
        }
    }
}

/// What the frame loop does when the detector, dispatcher, or renderer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and move on to the next frame.
    #[default]
    Continue,
    /// Stop the loop and return the failure.
    Abort,
}

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Pause before the loop starts, giving time to focus the game window.
    pub startup_delay_secs: f64,
    /// Single policy for collaborator failures.
    pub on_collaborator_error: ErrorPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            startup_delay_secs: constants::DEFAULT_STARTUP_DELAY_SECS,
            on_collaborator_error: ErrorPolicy::default(),
        }
    }
}

impl RuntimeConfig {
    /// Startup delay as a [`Duration`].
    #[must_use]
    pub fn startup_delay(&self) -> Duration {
        secs_to_duration(self.startup_delay_secs)
    }
}

impl GesturectlConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GesturectlError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GesturectlError::Config {
            message: format!("cannot serialize configuration: {e}"),
        })
    }

    /// Checks every tunable against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`GesturectlError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval(
            "detection.min_detection_confidence",
            self.detection.min_detection_confidence,
        )?;
        check_unit_interval(
            "detection.min_tracking_confidence",
            self.detection.min_tracking_confidence,
        )?;
        if self.detection.max_hands == 0 {
            return Err(invalid("detection.max_hands must be at least 1"));
        }
        let threshold = self.classifier.swipe_threshold_px;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(invalid(format!(
                "classifier.swipe_threshold_px must be positive, got {threshold}"
            )));
        }
        check_non_negative("classifier.cooldown_secs", self.classifier.cooldown_secs)?;
        check_non_negative("runtime.startup_delay_secs", self.runtime.startup_delay_secs)?;
        if self.display.scale_percent == 0 {
            return Err(invalid("display.scale_percent must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> GesturectlError {
    GesturectlError::Config {
        message: message.into(),
    }
}

fn check_unit_interval(field: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{field} must be within [0, 1], got {value}")))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    Duration::try_from_secs_f64(value).map(|_| ()).map_err(|_| {
        invalid(format!(
            "{field} must be a non-negative number of seconds, got {value}"
        ))
    })
}

fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
