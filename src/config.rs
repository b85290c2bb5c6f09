//! Runtime settings.

use std::time::Duration;

use crate::queue::DEFAULT_QUEUE_CAPACITY;
use crate::registry::{CapacityPolicy, DEFAULT_MAX_DEVICES};

/// Environment variable holding the freshness window in seconds.
pub const STALE_SECS_ENV: &str = "SB_STALE_SECS";
/// Freshness window used when the setting is missing or invalid.
pub const DEFAULT_STALE_SECS: u64 = 900;
/// Exclusive upper bound for the freshness window (one day).
pub const MAX_STALE_SECS: u64 = 86_400;
/// Pause between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(25);

/// Parses the freshness window setting.
///
/// Accepts a positive integer below [`MAX_STALE_SECS`]; anything else,
/// including a missing value, yields [`DEFAULT_STALE_SECS`].
pub fn parse_stale_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&v| v > 0 && v < MAX_STALE_SECS)
        .unwrap_or(DEFAULT_STALE_SECS)
}

/// Dashboard settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Freshness window in seconds.
    pub stale_secs: u64,
    pub queue_capacity: usize,
    pub capacity: CapacityPolicy,
    pub frame_interval: Duration,
    /// Whether the terminal can show the humidity alert color.
    pub colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stale_secs: DEFAULT_STALE_SECS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            capacity: CapacityPolicy::Bounded(DEFAULT_MAX_DEVICES),
            frame_interval: FRAME_INTERVAL,
            colors: true,
        }
    }
}

impl Settings {
    /// Settings with the freshness window taken from raw setting text.
    pub fn with_stale_secs(mut self, raw: Option<&str>) -> Self {
        self.stale_secs = parse_stale_secs(raw);
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values() {
        assert_eq!(parse_stale_secs(Some("1")), 1);
        assert_eq!(parse_stale_secs(Some("300")), 300);
        assert_eq!(parse_stale_secs(Some(" 600 ")), 600);
        assert_eq!(parse_stale_secs(Some("86399")), 86_399);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        for raw in ["", "0", "-5", "86400", "100000", "abc", "12s", "1.5"] {
            assert_eq!(
                parse_stale_secs(Some(raw)),
                DEFAULT_STALE_SECS,
                "raw: {:?}",
                raw
            );
        }
        assert_eq!(parse_stale_secs(None), DEFAULT_STALE_SECS);
    }

    #[test]
    fn test_settings_builder() {
        let s = Settings::default()
            .with_stale_secs(Some("120"))
            .with_colors(false);
        assert_eq!(s.stale_secs, 120);
        assert!(!s.colors);
        assert_eq!(s.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(s.capacity, CapacityPolicy::Bounded(DEFAULT_MAX_DEVICES));
    }
}
