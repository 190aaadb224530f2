//! # gesturectl-tui
//!
//! Terminal renderer for the gesture control loop.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - The detected hand skeleton drawn on a canvas, scaled by `display.scale_percent`.
//! - The zone grid of the active policy.
//! - The current action and a short history of dispatched actions.
//!
//! Pressing `q` or Esc ends the loop.

pub mod app;
pub mod event;
pub mod renderer;
pub mod ui;

pub use renderer::TuiRenderer;
