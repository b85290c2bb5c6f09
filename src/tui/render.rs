//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::AppState;
use super::widgets::{render_devices, render_footer, render_header, render_summary};

/// Height of an Indoor/Garden panel, borders included.
const SUMMARY_HEIGHT: u16 = 3;

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),              // Header
        Constraint::Length(SUMMARY_HEIGHT), // Indoor | Garden
        Constraint::Min(0),                 // Device table
        Constraint::Length(1),              // Keybindings
    ])
    .split(frame.area());

    render_header(frame, chunks[0], state);
    render_summary(frame, chunks[1], state);
    render_devices(frame, chunks[2], state);
    render_footer(frame, chunks[3]);
}
