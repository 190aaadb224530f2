//! Terminal event handling.
//!
//! Polls crossterm for keyboard and resize events between frames.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Any other input; nothing to do.
    Tick,
}

/// Waits up to `timeout` for the next terminal event.
///
/// # Errors
///
/// Returns an error if the terminal cannot be polled or read.
pub fn poll(timeout: Duration) -> io::Result<Option<TerminalEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
        Event::Resize(w, h) => TerminalEvent::Resize(w, h),
        _ => TerminalEvent::Tick,
    };
    Ok(Some(event))
}
