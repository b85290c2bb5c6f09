//! Tolerant decoding of one NDJSON line into a [`Reading`].
//!
//! Telemetry producers disagree on field names, so every field has a short
//! list of accepted aliases. Anything that is not a JSON object with a string
//! identifier is dropped without error.

use serde_json::{Map, Value};
use tracing::trace;

/// Location used when a reading carries neither `location` nor `room`.
pub const UNKNOWN_LOCATION: &str = "unknown";

const ID_FIELDS: &[&str] = &["id", "device_id"];
const LOCATION_FIELDS: &[&str] = &["location", "room"];
const TIMESTAMP_FIELDS: &[&str] = &["ts", "time"];
const TEMPERATURE_FIELDS: &[&str] = &["temp", "temperature", "temperature_c"];
const HUMIDITY_FIELDS: &[&str] = &["humidity", "humidity_pct"];

/// One decoded sensor reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: String,
    pub location: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    pub humidity: Option<f64>,
}

/// Decodes `line`, using `now` when the reading has no usable timestamp.
pub fn decode_line(line: &str, now: i64) -> Option<Reading> {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            trace!("discarding malformed line: {}", e);
            return None;
        }
    };
    let Some(obj) = value.as_object() else {
        trace!("discarding non-object line");
        return None;
    };

    let Some(id) = first_string(obj, ID_FIELDS) else {
        trace!("discarding reading without identifier");
        return None;
    };
    let location = first_string(obj, LOCATION_FIELDS).unwrap_or(UNKNOWN_LOCATION);

    Some(Reading {
        id: id.trim().to_string(),
        location: location.trim().to_string(),
        timestamp: first_timestamp(obj).unwrap_or(now),
        temperature: first_number(obj, TEMPERATURE_FIELDS),
        humidity: first_number(obj, HUMIDITY_FIELDS),
    })
}

/// Decodes `line` against the current wall-clock time.
pub fn decode_line_now(line: &str) -> Option<Reading> {
    decode_line(line, chrono::Utc::now().timestamp())
}

fn first_string<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|f| obj.get(*f).and_then(Value::as_str))
}

fn first_number(obj: &Map<String, Value>, fields: &[&str]) -> Option<f64> {
    fields.iter().find_map(|f| obj.get(*f).and_then(Value::as_f64))
}

/// First non-zero numeric timestamp, truncated toward zero.
/// A zero value counts as absent.
fn first_timestamp(obj: &Map<String, Value>) -> Option<i64> {
    TIMESTAMP_FIELDS
        .iter()
        .filter_map(|f| obj.get(*f).and_then(as_epoch_secs))
        .find(|&ts| ts != 0)
}

fn as_epoch_secs(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}
