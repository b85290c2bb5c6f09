//! Terminal User Interface for the sensor dashboard.
//!
//! [`App`] drives the frame loop: drain queued lines, update the registry,
//! recompute averages, draw, then handle at most one key.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, IngestStats};
