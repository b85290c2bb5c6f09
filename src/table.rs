//! Generic table layout: column fitting and scroll/pagination state.

/// Rows moved by a page scroll.
pub const PAGE_STEP: usize = 10;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub preferred: u16,
    /// Equal to `preferred` for columns that never shrink.
    pub min: u16,
    pub align: Align,
}

impl ColumnSpec {
    pub const fn fixed(header: &'static str, width: u16, align: Align) -> Self {
        Self {
            header,
            preferred: width,
            min: width,
            align,
        }
    }

    pub const fn shrinkable(header: &'static str, preferred: u16, min: u16, align: Align) -> Self {
        Self {
            header,
            preferred,
            min,
            align,
        }
    }
}

/// Total width of `widths` laid out with a one-cell separator between columns.
pub fn total_width(widths: &[u16]) -> u32 {
    let cells: u32 = widths.iter().map(|&w| u32::from(w)).sum();
    cells + widths.len().saturating_sub(1) as u32
}

/// Fits columns into `available` cells.
///
/// When preferred widths overflow, the overflow is split between the
/// shrinkable columns in order (the first takes its share rounded down, the
/// last takes the remainder), none going below its minimum. Columns may still
/// overflow after that; the caller clips at draw time.
pub fn fit_widths(columns: &[ColumnSpec], available: u16) -> Vec<u16> {
    let mut widths: Vec<u16> = columns.iter().map(|c| c.preferred).collect();
    let total = total_width(&widths);
    if total <= u32::from(available) {
        return widths;
    }

    let mut over = total - u32::from(available);
    let shrinkable: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.min < c.preferred)
        .map(|(i, _)| i)
        .collect();

    for (n, &i) in shrinkable.iter().enumerate() {
        let remaining = (shrinkable.len() - n) as u32;
        let share = if remaining == 1 { over } else { over / remaining };
        let slack = u32::from(columns[i].preferred - columns[i].min);
        let take = share.min(slack);
        widths[i] -= take as u16;
        over -= take;
    }
    widths
}

/// Rows available for data once the header row is reserved.
pub fn visible_rows(height: u16) -> usize {
    usize::from(height).saturating_sub(1)
}

/// Row count and viewport height the scroll offset is clamped against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub total_rows: usize,
    pub visible_rows: usize,
}

impl Viewport {
    pub fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

/// Vertical scroll position of a table.
///
/// Every mutation clamps to `[0, max(0, total_rows - visible_rows)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn clamp(&mut self, viewport: Viewport) {
        self.offset = self.offset.min(viewport.max_offset());
    }

    pub fn down(&mut self, n: usize, viewport: Viewport) {
        self.offset = self.offset.saturating_add(n);
        self.clamp(viewport);
    }

    pub fn up(&mut self, n: usize, viewport: Viewport) {
        self.offset = self.offset.saturating_sub(n);
        self.clamp(viewport);
    }

    /// Index range of the rows currently on screen.
    pub fn visible_range(&self, viewport: Viewport) -> std::ops::Range<usize> {
        let start = self.offset.min(viewport.total_rows);
        let end = start
            .saturating_add(viewport.visible_rows)
            .min(viewport.total_rows);
        start..end
    }
}
