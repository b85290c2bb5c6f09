//! Keybinding help line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

const BINDINGS: [(&str, &str); 3] = [
    ("q", "quit"),
    ("↑/↓ or j/k", "scroll"),
    ("PgUp/PgDn", "page"),
];

/// Renders the footer line.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in BINDINGS {
        spans.push(Span::styled(key, Styles::help_key()));
        spans.push(Span::styled(format!(" {action} • "), Styles::help()));
    }
    spans.push(Span::styled(
        "Averages include only fresh readings",
        Styles::help(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
