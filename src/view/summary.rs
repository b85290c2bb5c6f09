//! Indoor/Garden summary panels.

use crate::aggregate::{Aggregates, ClassSummary, DeviceClass};
use crate::fmt::{format_celsius, format_percent};

/// One summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: &'static str,
    pub line: String,
}

pub fn panel_title(class: DeviceClass) -> &'static str {
    match class {
        DeviceClass::Indoor => "Indoor (location != 'garden')",
        DeviceClass::Garden => "Garden (location == 'garden')",
    }
}

pub fn build_panel(class: DeviceClass, summary: &ClassSummary, stale_secs: u64) -> PanelView {
    PanelView {
        title: panel_title(class),
        line: format!(
            "Temp: {}   RH: {}   Devices: {} (fresh ≤{}s)",
            format_celsius(summary.mean_temperature),
            format_percent(summary.mean_humidity),
            summary.devices,
            stale_secs
        ),
    }
}

/// Indoor panel first, then Garden.
pub fn build_panels(aggregates: &Aggregates, stale_secs: u64) -> [PanelView; 2] {
    [DeviceClass::Indoor, DeviceClass::Garden]
        .map(|class| build_panel(class, aggregates.get(class), stale_secs))
}
