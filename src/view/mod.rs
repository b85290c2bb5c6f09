//! View models: what text goes in which cell and how it is classified.
//!
//! Nothing here touches the terminal; `tui` turns these into widgets.

pub mod common;
pub mod devices;
pub mod summary;
