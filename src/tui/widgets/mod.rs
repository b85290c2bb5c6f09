//! TUI widgets for the sensor dashboard.

mod devices;
mod footer;
mod header;
mod summary;

pub use devices::render_devices;
pub use footer::render_footer;
pub use header::render_header;
pub use summary::render_summary;
