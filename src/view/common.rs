//! UI-agnostic view model types.
//!
//! These types carry the text and style class of every logical cell without
//! depending on a rendering framework. The TUI maps them to ratatui styles.

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Muted (TUI: dark gray). Stale devices.
    Dimmed,
    /// Alert (TUI: white on red, bold). Out-of-range indoor humidity.
    Alert,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }

    /// Style the cell is drawn with inside a row styled `row`.
    pub fn effective_style(&self, row: RowStyleClass) -> RowStyleClass {
        self.style.unwrap_or(row)
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel<Id> {
    pub title: String,
    /// Header cells, already padded to `widths`.
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    /// Only the rows inside the current scroll window.
    pub rows: Vec<ViewRow<Id>>,
    pub footer: String,
}
