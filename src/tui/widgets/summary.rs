//! Indoor/Garden summary panels.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::summary::build_panels;

/// Renders both panels side by side.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (panel, chunk) in build_panels(&state.aggregates, state.stale_secs)
        .into_iter()
        .zip(chunks.iter())
    {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", panel.title), Styles::block_title()))
            .borders(Borders::ALL)
            .border_style(Styles::border());
        let body = Paragraph::new(format!(" {} ", panel.line)).block(block);
        frame.render_widget(body, *chunk);
    }
}
