//! Unified error types for the gesturectl workspace.
//!
//! Collaborator failures (detector, dispatcher, renderer) carry their own
//! variants so the frame loop can decide once how to treat them.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Action;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GesturectlError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path (or stream name) where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The frame source could not deliver the current frame.
    ///
    /// Never fatal: the loop skips the frame and asks for the next one.
    #[error("frame unavailable: {reason}")]
    FrameUnavailable {
        /// Why the frame was dropped.
        reason: String,
    },

    /// The hand detector failed on a frame.
    #[error("hand detector failed: {message}")]
    Detector {
        /// Description of the failure.
        message: String,
    },

    /// The key dispatcher could not deliver a key press.
    #[error("failed to press '{action}': {message}")]
    Dispatch {
        /// Action that was being dispatched.
        action: Action,
        /// Description of the failure.
        message: String,
    },

    /// The renderer failed to draw or poll input.
    #[error("render error: {message}")]
    Render {
        /// Description of the failure.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// A TOML configuration file could not be parsed.
    #[error("config parse error: {source}")]
    ConfigParse {
        /// Underlying TOML error.
        #[from]
        source: toml::de::Error,
    },
}

impl GesturectlError {
    /// Returns `true` for errors the frame loop always skips over.
    #[must_use]
    pub const fn is_frame_unavailable(&self) -> bool {
        matches!(self, Self::FrameUnavailable { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GesturectlError>;
