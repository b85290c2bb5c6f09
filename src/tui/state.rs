//! Dashboard state owned by the render loop.
//!
//! Nothing in here is shared with the input thread; lines arrive only through
//! the [`crate::queue::LineReceiver`] held by the app.

use crate::aggregate::Aggregates;
use crate::config::Settings;
use crate::reading::decode_line;
use crate::registry::{DeviceRegistry, UpsertOutcome};
use crate::table::{ScrollState, Viewport};

/// Counters for lines taken off the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: u64,
    /// Lines that did not decode to a reading.
    pub discarded: u64,
    /// Readings for an excluded location.
    pub excluded: u64,
    /// Readings for new devices rejected by the capacity policy.
    pub dropped: u64,
}

/// Application state.
#[derive(Debug)]
pub struct AppState {
    pub registry: DeviceRegistry,
    pub aggregates: Aggregates,
    pub scroll: ScrollState,
    /// Row count and table height from the last rendered frame.
    pub viewport: Viewport,
    /// Freshness window in seconds.
    pub stale_secs: u64,
    pub colors: bool,
    /// Timestamp the current frame is computed for.
    pub now: i64,
    pub stats: IngestStats,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            registry: DeviceRegistry::new(settings.capacity),
            aggregates: Aggregates::default(),
            scroll: ScrollState::default(),
            viewport: Viewport::default(),
            stale_secs: settings.stale_secs,
            colors: settings.colors,
            now: 0,
            stats: IngestStats::default(),
        }
    }

    /// Decodes one raw line and merges it into the registry.
    pub fn ingest_line(&mut self, line: &str, now: i64) -> Option<UpsertOutcome> {
        self.stats.lines += 1;
        let Some(reading) = decode_line(line, now) else {
            self.stats.discarded += 1;
            return None;
        };
        let outcome = self.registry.upsert(&reading);
        match outcome {
            UpsertOutcome::Excluded => self.stats.excluded += 1,
            UpsertOutcome::Dropped => self.stats.dropped += 1,
            UpsertOutcome::Created | UpsertOutcome::Updated => {}
        }
        Some(outcome)
    }

    /// Recomputes the per-class averages as of `now`.
    pub fn refresh(&mut self, now: i64) {
        self.now = now;
        self.aggregates = Aggregates::compute(&self.registry, now, self.stale_secs);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll.down(n, self.viewport);
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll.up(n, self.viewport);
    }
}
