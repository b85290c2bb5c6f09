//! sensordash - live terminal dashboard for temperature/humidity sensors.
//!
//! Newline-delimited JSON readings arrive on an input thread ([`source`]),
//! cross a bounded drop-oldest queue ([`queue`]) and are folded into a
//! per-device registry by the render loop ([`tui`]). Everything between
//! decoding and drawing is plain data so it can be tested without a terminal.

pub mod aggregate;
pub mod config;
pub mod fmt;
pub mod queue;
pub mod reading;
pub mod registry;
pub mod source;
pub mod table;
pub mod tui;
pub mod view;
