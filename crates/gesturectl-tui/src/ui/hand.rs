//! Hand skeleton view.
//!
//! Landmarks are normalized with `y` growing downward; the canvas has
//! `y` growing upward, so every point is flipped.

use gesturectl_common::types::{HAND_CONNECTIONS, HandLandmarks, Landmark, PolicyKind, landmark};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Context, Line, Points};

use super::scaled_size;
use crate::app::App;

const GRID: Color = Color::DarkGray;

/// Renders the hand skeleton and the policy's zone grid.
pub fn render_hand_view(frame: &mut Frame, area: Rect, app: &App) {
    let (w, h) = scaled_size(app.frame_size.0, app.frame_size.1, app.scale_percent);
    let title = format!(" {} {w}x{h} ", app.title);
    let (w, h) = (f64::from(w.max(1)), f64::from(h.max(1)));
    let color = if app.current.is_neutral() {
        Color::Green
    } else {
        Color::Yellow
    };

    let canvas = Canvas::default()
        .block(Block::bordered().title(title))
        .marker(Marker::Braille)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            if let Some(policy) = app.policy {
                draw_zone_grid(ctx, policy, w, h);
            }
            ctx.layer();
            for hand in &app.hands {
                draw_hand(ctx, hand, w, h, color);
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_zone_grid(ctx: &mut Context<'_>, policy: PolicyKind, w: f64, h: f64) {
    let label = |text: &'static str| Span::styled(text, Style::new().fg(GRID));
    match policy {
        PolicyKind::Zone | PolicyKind::FistZone => {
            for x in [w / 3.0, w * 2.0 / 3.0] {
                ctx.draw(&Line::new(x, 0.0, x, h, GRID));
            }
            ctx.draw(&Line::new(0.0, h * 2.0 / 3.0, w, h * 2.0 / 3.0, GRID));
            ctx.print(w * 0.05, h / 2.0, label("left"));
            ctx.print(w * 0.85, h / 2.0, label("right"));
            ctx.print(w * 0.47, h * 0.9, label("up"));
            if policy == PolicyKind::Zone {
                ctx.draw(&Line::new(0.0, h / 3.0, w, h / 3.0, GRID));
                ctx.print(w * 0.45, h * 0.1, label("down"));
            } else {
                ctx.print(w * 0.42, h * 0.1, label("fist: down"));
            }
        }
        PolicyKind::Swipe => {
            ctx.print(w * 0.02, h * 0.95, label("swipe left/right/up, fist: down"));
        }
    }
}

fn draw_hand(ctx: &mut Context<'_>, hand: &HandLandmarks, w: f64, h: f64, color: Color) {
    let project = |lm: Landmark| (f64::from(lm.x) * w, h - f64::from(lm.y) * h);

    for (a, b) in HAND_CONNECTIONS {
        let (x1, y1) = project(hand.point(a));
        let (x2, y2) = project(hand.point(b));
        ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }
    let joints: Vec<(f64, f64)> = hand.landmarks.iter().copied().map(project).collect();
    ctx.draw(&Points {
        coords: &joints,
        color: Color::White,
    });
    ctx.draw(&Points {
        coords: &[project(hand.point(landmark::INDEX_TIP))],
        color: Color::Red,
    });
}
