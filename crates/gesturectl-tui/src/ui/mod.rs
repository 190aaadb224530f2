//! Screen layout.
//!
//! ```text
//! ┌ title ──────────────────────────┐┌ actions ──────┐
//! │ hand skeleton + zone grid       ││ newest first  │
//! └─────────────────────────────────┘└───────────────┘
//! ┌ status ──────────────────────────────────────────┐
//! └──────────────────────────────────────────────────┘
//! ```

pub mod hand;
pub mod status;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::App;

/// Width of the action history panel, in cells.
const HISTORY_WIDTH: u16 = 26;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [main, status_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(frame.area());
    let [canvas_area, history_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(HISTORY_WIDTH)]).areas(main);

    hand::render_hand_view(frame, canvas_area, app);
    status::render_history(frame, history_area, app);
    status::render_status(frame, status_area, app);
}

/// Frame size after applying the display upscale.
#[must_use]
pub fn scaled_size(width: u32, height: u32, scale_percent: u32) -> (u32, u32) {
    let scale = |v: u32| {
        u32::try_from(u64::from(v) * u64::from(scale_percent) / 100).unwrap_or(u32::MAX)
    };
    (scale(width), scale(height))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gesturectl_common::config::DisplayConfig;
    use gesturectl_common::constants::HAND_LANDMARK_COUNT;
    use gesturectl_common::types::{Action, HandLandmarks, Landmark, PolicyKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::EmittedAction;

    #[test]
    fn scaled_size_applies_percent() {
        assert_eq!(scaled_size(640, 480, 120), (768, 576));
        assert_eq!(scaled_size(640, 480, 100), (640, 480));
        assert_eq!(scaled_size(641, 481, 50), (320, 240));
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        let _ = terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn empty_screen_shows_title_and_waiting_status() {
        let app = App::new(&DisplayConfig::default());
        let text = screen(&app);
        assert!(text.contains("Hand Gesture Controller"));
        assert!(text.contains("waiting for frames"));
    }

    #[test]
    fn status_and_history_reflect_the_last_frame() {
        let mut app = App::new(&DisplayConfig::default());
        app.policy = Some(PolicyKind::FistZone);
        app.frame_index = 42;
        app.frame_size = (640, 480);
        app.current = Action::Down;
        app.hands = vec![HandLandmarks::new(
            [Landmark::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT],
            0.9,
        )];
        app.history.push_front(EmittedAction {
            frame: 40,
            timestamp: Duration::from_millis(1320),
            action: Action::Down,
        });
        app.emitted = 1;

        let text = screen(&app);
        assert!(text.contains("fist-zone"), "{text}");
        assert!(text.contains("frame 42"), "{text}");
        assert!(text.contains("DOWN"), "{text}");
        assert!(text.contains("1.32s"), "{text}");
        assert!(text.contains("768x576"), "{text}");
    }
}
