//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::common::RowStyleClass;

/// Dashboard palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::Reset;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const ALERT_FG: Color = Color::White;
    pub const ALERT_BG: Color = Color::Red;

    pub const BORDER: Color = Color::Gray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Title line style.
    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Panel and table border style.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Block title style.
    pub fn block_title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style (stale rows, table footer).
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Out-of-range humidity.
    pub fn alert() -> Style {
        Style::default()
            .fg(Theme::ALERT_FG)
            .bg(Theme::ALERT_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Dimmed => Self::dim(),
            RowStyleClass::Alert => Self::alert(),
        }
    }
}
