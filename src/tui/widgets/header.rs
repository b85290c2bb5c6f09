//! Header line: dashboard title and clock.

use chrono::{DateTime, Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::registry::EXCLUDED_LOCATION;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

const CLOCK_WIDTH: u16 = 19;

pub fn title_text() -> String {
    format!("SwitchBot Sensors — excluding '{EXCLUDED_LOCATION}'")
}

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),              // Title
        Constraint::Length(CLOCK_WIDTH), // Time
    ])
    .split(area);

    let title = Paragraph::new(title_text()).style(Styles::title());
    frame.render_widget(title, chunks[0]);

    let time_str = Local
        .timestamp_opt(state.now, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----".to_string());
    let time = Paragraph::new(time_str)
        .style(Styles::dim())
        .alignment(Alignment::Right);
    frame.render_widget(time, chunks[1]);
}
