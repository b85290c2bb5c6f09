//! Device table widget.
//!
//! Drawn as styled lines rather than a ratatui `Table`: column widths are
//! already fitted by the view model and anything past the right edge is
//! clipped instead of squeezed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::common::{TableViewModel, ViewRow};
use crate::view::devices::{DevicesViewOptions, build_devices_view};

const SEPARATOR: &str = " ";

/// Renders the bordered device table and stores its viewport in `state`.
pub fn render_devices(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Header + rows
        Constraint::Length(1), // Table footer
    ])
    .split(inner);

    let opts = DevicesViewOptions {
        now: state.now,
        stale_secs: state.stale_secs,
        colors: state.colors,
        width: chunks[0].width,
        height: chunks[0].height,
    };
    let view = build_devices_view(&state.registry, &opts, &mut state.scroll);
    state.viewport = view.viewport;
    let table = view.table;

    let block = block.title(Span::styled(
        format!(" {} ", table.title),
        Styles::block_title(),
    ));
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(header_line(&table));
    lines.extend(table.rows.iter().map(row_line));
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = Paragraph::new(table.footer.as_str())
        .style(Styles::dim())
        .alignment(Alignment::Right);
    frame.render_widget(footer, chunks[1]);
}

fn header_line<Id>(table: &TableViewModel<Id>) -> Line<'_> {
    let text = table.headers.join(SEPARATOR);
    Line::from(Span::styled(text, Styles::table_header()))
}

fn row_line<Id>(row: &ViewRow<Id>) -> Line<'_> {
    let row_style = Styles::from_class(row.style);
    let mut spans = Vec::with_capacity(row.cells.len() * 2);
    for (i, cell) in row.cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, row_style));
        }
        let style = Styles::from_class(cell.effective_style(row.style));
        spans.push(Span::styled(cell.text.as_str(), style));
    }
    Line::from(spans)
}
