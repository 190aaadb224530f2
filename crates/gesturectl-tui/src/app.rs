//! TUI application state.
//!
//! Holds a snapshot of the last rendered frame and the history of
//! dispatched actions, and turns terminal events into a quit request.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gesturectl_common::config::DisplayConfig;
use gesturectl_common::types::{Action, HandLandmarks, PolicyKind};
use gesturectl_runtime::render::RenderContext;

use crate::event::TerminalEvent;

/// Number of dispatched actions kept for the history panel.
pub const HISTORY_LEN: usize = 12;

/// One dispatched action, as shown in the history panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedAction {
    /// Frame that produced the action.
    pub frame: u64,
    /// Frame timestamp.
    pub timestamp: Duration,
    /// The action.
    pub action: Action,
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the loop should keep running.
    pub running: bool,
    /// Title shown in the frame border.
    pub title: String,
    /// Display upscale in percent.
    pub scale_percent: u32,
    /// Policy of the last rendered frame.
    pub policy: Option<PolicyKind>,
    /// Index of the last rendered frame.
    pub frame_index: u64,
    /// Size of the last rendered frame, in pixels.
    pub frame_size: (u32, u32),
    /// Hands in the last rendered frame.
    pub hands: Vec<HandLandmarks>,
    /// Action classified on the last rendered frame.
    pub current: Action,
    /// Most recent dispatched actions, newest first.
    pub history: VecDeque<EmittedAction>,
    /// Total dispatched actions since start.
    pub emitted: u64,
}

impl App {
    /// Creates the state for an empty screen.
    #[must_use]
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            running: true,
            title: display.window_title.clone(),
            scale_percent: display.scale_percent,
            policy: None,
            frame_index: 0,
            frame_size: (0, 0),
            hands: Vec::new(),
            current: Action::Neutral,
            history: VecDeque::with_capacity(HISTORY_LEN),
            emitted: 0,
        }
    }

    /// Takes a snapshot of the frame about to be drawn.
    pub fn observe(&mut self, ctx: &RenderContext<'_>) {
        self.policy = Some(ctx.policy);
        self.frame_index = ctx.frame.index;
        self.frame_size = (ctx.frame.width, ctx.frame.height);
        self.hands.clear();
        self.hands.extend_from_slice(ctx.hands);
        self.current = ctx.decision.action;

        if let Some(action) = ctx.dispatched {
            if self.history.len() == HISTORY_LEN {
                let _ = self.history.pop_back();
            }
            self.history.push_front(EmittedAction {
                frame: ctx.frame.index,
                timestamp: ctx.frame.timestamp,
                action,
            });
            self.emitted += 1;
        }
    }

    /// The most recently dispatched action.
    #[must_use]
    pub fn last_emitted(&self) -> Option<Action> {
        self.history.front().map(|e| e.action)
    }

    /// Applies a terminal event.
    pub fn handle(&mut self, event: &TerminalEvent) {
        match event {
            TerminalEvent::Key(key) if is_quit_key(key) => self.quit(),
            TerminalEvent::Key(_) | TerminalEvent::Resize(..) | TerminalEvent::Tick => {}
        }
    }

    /// Signals the loop to stop after this frame.
    pub fn quit(&mut self) {
        tracing::debug!(frame = self.frame_index, "quit key pressed");
        self.running = false;
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
