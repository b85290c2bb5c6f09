//! Latest-known state per physical device.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::reading::Reading;

/// Default maximum number of tracked devices.
pub const DEFAULT_MAX_DEVICES: usize = 1024;

/// Location whose readings are never stored (compared case-insensitively).
pub const EXCLUDED_LOCATION: &str = "attic";

/// Registry key. Both parts are compared exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceKey {
    pub id: String,
    pub location: String,
}

/// Last known values for one device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceEntry {
    pub timestamp: i64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl DeviceEntry {
    /// Applies a reading: the timestamp always moves to the reading's value,
    /// absent fields keep their previous value.
    fn merge(&mut self, reading: &Reading) {
        self.timestamp = reading.timestamp;
        if let Some(t) = reading.temperature {
            self.temperature = Some(t);
        }
        if let Some(h) = reading.humidity {
            self.humidity = Some(h);
        }
    }
}

/// How the registry reacts to a new device key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// At most `n` devices; new keys beyond that are dropped silently.
    Bounded(usize),
    /// No limit.
    Unbounded,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::Bounded(DEFAULT_MAX_DEVICES)
    }
}

impl CapacityPolicy {
    fn admits(self, current: usize) -> bool {
        match self {
            CapacityPolicy::Bounded(max) => current < max,
            CapacityPolicy::Unbounded => true,
        }
    }
}

/// Result of [`DeviceRegistry::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
    /// Location is excluded; nothing stored.
    Excluded,
    /// Registry is full and the key is new; nothing stored.
    Dropped,
}

/// Returns true iff readings from `location` must never be stored.
pub fn is_excluded(location: &str) -> bool {
    location.eq_ignore_ascii_case(EXCLUDED_LOCATION)
}

/// Keyed store of device state. Entries are never removed.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: HashMap<DeviceKey, DeviceEntry>,
    policy: CapacityPolicy,
    dropped_new_keys: u64,
}

impl DeviceRegistry {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            devices: HashMap::new(),
            policy,
            dropped_new_keys: 0,
        }
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Merges `reading` into the entry for its (id, location) key.
    pub fn upsert(&mut self, reading: &Reading) -> UpsertOutcome {
        if is_excluded(&reading.location) {
            return UpsertOutcome::Excluded;
        }

        let key = DeviceKey {
            id: reading.id.clone(),
            location: reading.location.clone(),
        };
        let current = self.devices.len();
        match self.devices.entry(key) {
            Entry::Occupied(mut e) => {
                e.get_mut().merge(reading);
                UpsertOutcome::Updated
            }
            Entry::Vacant(e) => {
                if !self.policy.admits(current) {
                    if self.dropped_new_keys == 0 {
                        warn!(
                            "device registry full ({} devices), ignoring new devices",
                            current
                        );
                    }
                    self.dropped_new_keys += 1;
                    return UpsertOutcome::Dropped;
                }
                debug!("new device {} @ {}", reading.id, reading.location);
                e.insert(DeviceEntry::default()).merge(reading);
                UpsertOutcome::Created
            }
        }
    }

    pub fn get(&self, id: &str, location: &str) -> Option<&DeviceEntry> {
        self.devices.get(&DeviceKey {
            id: id.to_string(),
            location: location.to_string(),
        })
    }

    /// Iterates all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeviceKey, &DeviceEntry)> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Number of upserts rejected because the registry was full.
    pub fn dropped_new_keys(&self) -> u64 {
        self.dropped_new_keys
    }
}
