//! Device table view model: sort, fit, paginate, format and classify rows.

use std::ops::RangeInclusive;

use crate::aggregate::{DeviceClass, entry_dew_point, is_fresh};
use crate::fmt::{fit, format_age_secs, format_opt_fixed};
use crate::registry::{DeviceEntry, DeviceKey, DeviceRegistry};
use crate::table::{Align, ColumnSpec, ScrollState, Viewport, fit_widths, visible_rows};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub const TITLE: &str = "Sensors (dew point shown per row)";

/// Room, Device, Temp, RH, Dew point, Age.
pub const COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec::shrinkable("Room", 14, 8, Align::Left),
    ColumnSpec::shrinkable("Device", 18, 10, Align::Left),
    ColumnSpec::fixed("Temp(°C)", 10, Align::Right),
    ColumnSpec::fixed("RH(%)", 7, Align::Right),
    ColumnSpec::fixed("DewPt(°C)", 11, Align::Right),
    ColumnSpec::fixed("Age(s)", 8, Align::Right),
];

const COL_ROOM: usize = 0;
const COL_DEVICE: usize = 1;
const COL_TEMP: usize = 2;
const COL_RH: usize = 3;
const COL_DEW: usize = 4;
const COL_AGE: usize = 5;

/// Indoor humidity outside this range (percent, inclusive) is flagged.
pub const COMFORT_HUMIDITY: RangeInclusive<f64> = 30.0..=60.0;

/// Frame-dependent inputs to the device table.
#[derive(Debug, Clone, Copy)]
pub struct DevicesViewOptions {
    pub now: i64,
    pub stale_secs: u64,
    /// Whether the surface can show the alert color.
    pub colors: bool,
    /// Drawing area for the table, header row included.
    pub width: u16,
    pub height: u16,
}

/// The device table for one frame.
#[derive(Debug, Clone)]
pub struct DevicesView {
    pub table: TableViewModel<DeviceKey>,
    /// Row count and capacity the scroll offset was clamped against.
    pub viewport: Viewport,
}

/// True iff an indoor humidity reading should be highlighted.
pub fn humidity_alert(class: DeviceClass, humidity: Option<f64>) -> bool {
    class == DeviceClass::Indoor && humidity.is_some_and(|h| !COMFORT_HUMIDITY.contains(&h))
}

/// Builds the visible page of the device table.
///
/// `scroll` is re-clamped against the current row count and viewport height.
pub fn build_devices_view(
    registry: &DeviceRegistry,
    opts: &DevicesViewOptions,
    scroll: &mut ScrollState,
) -> DevicesView {
    let mut entries: Vec<(&DeviceKey, &DeviceEntry)> = registry.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id).then_with(|| a.location.cmp(&b.location)));

    let widths = fit_widths(&COLUMNS, opts.width);
    let viewport = Viewport {
        total_rows: entries.len(),
        visible_rows: visible_rows(opts.height),
    };
    scroll.clamp(viewport);
    let range = scroll.visible_range(viewport);

    let headers = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(c, &w)| fit(c.header, usize::from(w), Align::Left))
        .collect();

    let rows = entries[range.clone()]
        .iter()
        .map(|(key, entry)| build_row(key, entry, &widths, opts))
        .collect();

    let shown = if range.is_empty() {
        (0, 0)
    } else {
        (range.start + 1, range.end)
    };
    let footer = format!(
        " {} sensors • showing {}–{} • Indoor RH <30% or >60% highlighted ",
        viewport.total_rows, shown.0, shown.1
    );

    DevicesView {
        table: TableViewModel {
            title: TITLE.to_string(),
            headers,
            widths,
            rows,
            footer,
        },
        viewport,
    }
}

fn build_row(
    key: &DeviceKey,
    entry: &DeviceEntry,
    widths: &[u16],
    opts: &DevicesViewOptions,
) -> ViewRow<DeviceKey> {
    let w = |col: usize| usize::from(widths[col]);
    let age = opts.now.saturating_sub(entry.timestamp).max(0);
    let stale = !is_fresh(entry.timestamp, opts.now, opts.stale_secs);
    let class = DeviceClass::of(&key.location);

    let humidity_text = format_opt_fixed(entry.humidity, w(COL_RH), 0);
    let humidity = if opts.colors && humidity_alert(class, entry.humidity) {
        ViewCell::styled(humidity_text, RowStyleClass::Alert)
    } else {
        ViewCell::plain(humidity_text)
    };

    ViewRow {
        id: key.clone(),
        cells: vec![
            ViewCell::plain(fit(&key.location, w(COL_ROOM), Align::Left)),
            ViewCell::plain(fit(&key.id, w(COL_DEVICE), Align::Left)),
            ViewCell::plain(format_opt_fixed(entry.temperature, w(COL_TEMP), 1)),
            humidity,
            ViewCell::plain(format_opt_fixed(entry_dew_point(entry), w(COL_DEW), 1)),
            ViewCell::plain(format_age_secs(age, w(COL_AGE))),
        ],
        style: if stale {
            RowStyleClass::Dimmed
        } else {
            RowStyleClass::Normal
        },
    }
}
