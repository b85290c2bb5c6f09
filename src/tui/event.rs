//! Terminal event polling.
//!
//! Polling never waits: the render loop checks for at most one event per
//! frame and paces itself with a fixed sleep instead.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
}

/// Returns the next pending terminal event, if any, without blocking.
pub fn poll_event() -> io::Result<Option<Event>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    let event = match event::read()? {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    };
    Ok(event)
}
