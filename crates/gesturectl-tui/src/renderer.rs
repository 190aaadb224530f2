//! The terminal [`Renderer`].

use std::time::Duration;

use gesturectl_common::config::DisplayConfig;
use gesturectl_common::error::{GesturectlError, Result};
use gesturectl_runtime::render::{RenderContext, RenderControl, Renderer};
use ratatui::DefaultTerminal;

use crate::app::App;
use crate::event;
use crate::ui;

/// How long each frame waits for a key press.
const INPUT_POLL: Duration = Duration::from_millis(5);

/// Draws each frame to the terminal and watches for `q` / Esc.
///
/// Takes over the terminal (raw mode, alternate screen) on creation and
/// restores it on drop.
pub struct TuiRenderer {
    terminal: DefaultTerminal,
    app: App,
}

impl std::fmt::Debug for TuiRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuiRenderer")
            .field("app", &self.app)
            .finish_non_exhaustive()
    }
}

impl TuiRenderer {
    /// Enters the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn new(display: &DisplayConfig) -> Result<Self> {
        let terminal = ratatui::try_init().map_err(|e| render_error("failed to set up terminal", &e))?;
        let window_title = &display.window_title;
        tracing::debug!(title = %window_title, "terminal renderer started");
        Ok(Self {
            terminal,
            app: App::new(display),
        })
    }

    /// Current screen state.
    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }
}

impl Renderer for TuiRenderer {
    fn render(&mut self, ctx: &RenderContext<'_>) -> Result<RenderControl> {
        self.app.observe(ctx);
        let _ = self
            .terminal
            .draw(|frame| ui::draw(frame, &self.app))
            .map_err(|e| render_error("failed to draw frame", &e))?;

        let mut timeout = INPUT_POLL;
        while let Some(event) =
            event::poll(timeout).map_err(|e| render_error("failed to read input", &e))?
        {
            self.app.handle(&event);
            timeout = Duration::ZERO;
        }

        if self.app.running {
            Ok(RenderControl::Continue)
        } else {
            Ok(RenderControl::Quit)
        }
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

fn render_error(context: &str, err: &std::io::Error) -> GesturectlError {
    GesturectlError::Render {
        message: format!("{context}: {err}"),
    }
}
