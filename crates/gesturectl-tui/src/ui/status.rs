//! Status bar and action history.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::app::App;

/// Renders the one-line status bar.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.policy {
        None => Line::from(vec![
            Span::raw(" waiting for frames"),
            Span::styled("  q quit", Style::new().fg(Color::DarkGray)),
        ]),
        Some(policy) => {
            let action = app.current.to_string().to_uppercase();
            let action_style = if app.current.is_neutral() {
                Style::new().fg(Color::DarkGray)
            } else {
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            };
            let last = app
                .last_emitted()
                .map_or_else(|| "-".to_owned(), |a| a.to_string());
            Line::from(vec![
                Span::raw(format!(" policy {policy}  frame {}  ", app.frame_index)),
                Span::raw("action "),
                Span::styled(action, action_style),
                Span::raw(format!("  last {last}  sent {}", app.emitted)),
                Span::styled("  q quit", Style::new().fg(Color::DarkGray)),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

/// Renders the dispatched actions, newest first.
pub fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = app
        .history
        .iter()
        .map(|e| {
            ListItem::new(format!(
                "{:>6} {:>7.2}s {}",
                e.frame,
                e.timestamp.as_secs_f64(),
                e.action
            ))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::bordered().title(" actions ")),
        area,
    );
}
