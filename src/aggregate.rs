//! Freshness-windowed per-class averages and dew point.

use crate::registry::{DeviceEntry, DeviceRegistry};

/// Location that classifies a device as [`DeviceClass::Garden`].
pub const GARDEN_LOCATION: &str = "garden";

// Magnus-Tetens coefficients (Sonntag 1990), valid for -45..60 °C.
const MAGNUS_A: f64 = 17.62;
const MAGNUS_B: f64 = 243.12;

/// Indoor/Garden partition derived from the location text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Indoor,
    Garden,
}

impl DeviceClass {
    pub fn of(location: &str) -> Self {
        if location.eq_ignore_ascii_case(GARDEN_LOCATION) {
            DeviceClass::Garden
        } else {
            DeviceClass::Indoor
        }
    }
}

/// True iff a reading taken at `timestamp` is inside the window ending at `now`.
pub fn is_fresh(timestamp: i64, now: i64, window_secs: u64) -> bool {
    timestamp >= now.saturating_sub_unsigned(window_secs)
}

/// Dew point in °C, or `None` when the inputs are out of range.
pub fn dew_point(temperature: f64, humidity: f64) -> Option<f64> {
    if !temperature.is_finite() || !humidity.is_finite() || humidity <= 0.0 || humidity > 100.0 {
        return None;
    }
    let gamma = (humidity / 100.0).ln() + (MAGNUS_A * temperature) / (MAGNUS_B + temperature);
    let dp = MAGNUS_B * gamma / (MAGNUS_A - gamma);
    dp.is_finite().then_some(dp)
}

/// Dew point of a registry entry, when both inputs are known.
pub fn entry_dew_point(entry: &DeviceEntry) -> Option<f64> {
    dew_point(entry.temperature?, entry.humidity?)
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    fn value(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Averages for one class over fresh devices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassSummary {
    /// `None` when no fresh device reported a temperature.
    pub mean_temperature: Option<f64>,
    /// `None` when no fresh device reported a humidity.
    pub mean_humidity: Option<f64>,
    /// Fresh devices contributing at least one of the two values.
    pub devices: usize,
}

#[derive(Debug, Default)]
struct ClassAccumulator {
    temperature: Mean,
    humidity: Mean,
    devices: usize,
}

impl ClassAccumulator {
    fn add(&mut self, entry: &DeviceEntry) {
        if let Some(t) = entry.temperature {
            self.temperature.add(t);
        }
        if let Some(h) = entry.humidity {
            self.humidity.add(h);
        }
        if entry.temperature.is_some() || entry.humidity.is_some() {
            self.devices += 1;
        }
    }

    fn finish(self) -> ClassSummary {
        ClassSummary {
            mean_temperature: self.temperature.value(),
            mean_humidity: self.humidity.value(),
            devices: self.devices,
        }
    }
}

/// Indoor and Garden summaries for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregates {
    pub indoor: ClassSummary,
    pub garden: ClassSummary,
}

impl Aggregates {
    /// Summarizes every fresh device in `registry` as of `now`.
    pub fn compute(registry: &DeviceRegistry, now: i64, window_secs: u64) -> Self {
        let mut indoor = ClassAccumulator::default();
        let mut garden = ClassAccumulator::default();

        for (key, entry) in registry.iter() {
            if !is_fresh(entry.timestamp, now, window_secs) {
                continue;
            }
            match DeviceClass::of(&key.location) {
                DeviceClass::Indoor => indoor.add(entry),
                DeviceClass::Garden => garden.add(entry),
            }
        }

        Self {
            indoor: indoor.finish(),
            garden: garden.finish(),
        }
    }

    pub fn get(&self, class: DeviceClass) -> &ClassSummary {
        match class {
            DeviceClass::Indoor => &self.indoor,
            DeviceClass::Garden => &self.garden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;

    const NOW: i64 = 1_700_000_000;

    fn push(reg: &mut DeviceRegistry, id: &str, loc: &str, age: i64, t: Option<f64>, h: Option<f64>) {
        reg.upsert(&Reading {
            id: id.to_string(),
            location: loc.to_string(),
            timestamp: NOW - age,
            temperature: t,
            humidity: h,
        });
    }

    #[test]
    fn test_dew_point_reference_values() {
        let dp = dew_point(20.0, 50.0).unwrap();
        assert!((dp - 9.3).abs() < 0.1, "dp = {}", dp);

        let dp = dew_point(22.5, 60.0).unwrap();
        assert!((dp - 14.4).abs() < 0.1, "dp = {}", dp);

        let dp = dew_point(25.0, 100.0).unwrap();
        assert!((dp - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_dew_point_rejects_out_of_range() {
        for t in [-20.0, 0.0, 35.0] {
            assert!(dew_point(t, 0.0).is_none());
            assert!(dew_point(t, -5.0).is_none());
            assert!(dew_point(t, 101.0).is_none());
        }
        assert!(dew_point(f64::NAN, 50.0).is_none());
        assert!(dew_point(20.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_classification() {
        assert_eq!(DeviceClass::of("garden"), DeviceClass::Garden);
        assert_eq!(DeviceClass::of("GARDEN"), DeviceClass::Garden);
        assert_eq!(DeviceClass::of("Garden shed"), DeviceClass::Indoor);
        assert_eq!(DeviceClass::of("unknown"), DeviceClass::Indoor);
    }

    #[test]
    fn test_freshness_boundary() {
        let mut reg = DeviceRegistry::default();
        push(&mut reg, "fresh", "kitchen", 899, Some(20.0), None);
        push(&mut reg, "stale", "kitchen", 901, Some(30.0), None);

        let agg = Aggregates::compute(&reg, NOW, 900);
        assert_eq!(agg.indoor.mean_temperature, Some(20.0));
        assert_eq!(agg.indoor.devices, 1);

        assert!(is_fresh(NOW - 900, NOW, 900));
        assert!(!is_fresh(NOW - 901, NOW, 900));
    }

    #[test]
    fn test_means_are_independent() {
        let mut reg = DeviceRegistry::default();
        push(&mut reg, "t-only", "hall", 10, Some(21.0), None);
        push(&mut reg, "h-only", "hall", 10, None, Some(40.0));
        push(&mut reg, "empty", "hall", 10, None, None);

        let agg = Aggregates::compute(&reg, NOW, 900);
        assert_eq!(agg.indoor.mean_temperature, Some(21.0));
        assert_eq!(agg.indoor.mean_humidity, Some(40.0));
        assert_eq!(agg.indoor.devices, 2);
    }

    #[test]
    fn test_classes_are_separate() {
        let mut reg = DeviceRegistry::default();
        push(&mut reg, "A1", "Garden", 100, Some(22.5), Some(60.0));
        push(&mut reg, "B1", "kitchen", 5, Some(20.0), Some(50.0));
        push(&mut reg, "B2", "bedroom", 5, Some(18.0), Some(40.0));

        let agg = Aggregates::compute(&reg, NOW, 900);
        assert_eq!(agg.garden.mean_temperature, Some(22.5));
        assert_eq!(agg.garden.mean_humidity, Some(60.0));
        assert_eq!(agg.garden.devices, 1);
        assert_eq!(agg.indoor.mean_temperature, Some(19.0));
        assert_eq!(agg.indoor.mean_humidity, Some(45.0));
        assert_eq!(agg.get(DeviceClass::Indoor).devices, 2);
    }

    #[test]
    fn test_empty_class_is_undefined() {
        let reg = DeviceRegistry::default();
        let agg = Aggregates::compute(&reg, NOW, 900);
        assert_eq!(agg.garden, ClassSummary::default());
        assert!(agg.garden.mean_temperature.is_none());
        assert!(agg.garden.mean_humidity.is_none());
    }

    #[test]
    fn test_entry_dew_point_needs_both_values() {
        let entry = DeviceEntry {
            timestamp: NOW,
            temperature: Some(20.0),
            humidity: None,
        };
        assert!(entry_dew_point(&entry).is_none());
    }
}
