//! # gesturectl-runtime
//!
//! The capture → detect → classify → dispatch → render loop.
//!
//! Each external collaborator sits behind a trait so the loop can run
//! against a live landmark helper, a recorded trace, or in-memory fakes:
//! - [`FrameSource`](source::FrameSource): pulls the next frame.
//! - [`HandDetector`](detector::HandDetector): finds hand landmarks in a frame.
//! - [`KeyDispatcher`](dispatch::KeyDispatcher): presses the key for an action.
//! - [`Renderer`](render::Renderer): shows the frame and reports a quit request.
//!
//! The [`Controller`](controller::Controller) owns all four plus the
//! classifier and applies one failure policy to every collaborator.

pub mod controller;
pub mod detector;
pub mod dispatch;
pub mod frame;
pub mod render;
pub mod source;

pub use controller::{Controller, RunSummary};
pub use frame::Frame;
