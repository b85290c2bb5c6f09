//! Main TUI application.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::config::Settings;
use crate::queue::LineReceiver;
use crate::source::LineSource;

use super::event::{Event, poll_event};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
///
/// Owns the receiving end of the line queue and, once attached, the input
/// thread feeding it. Each frame drains the queue, recomputes averages,
/// redraws and handles at most one key.
pub struct App {
    lines: LineReceiver,
    source: Option<LineSource>,
    state: AppState,
    frame_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings, lines: LineReceiver) -> Self {
        Self {
            lines,
            source: None,
            state: AppState::new(settings),
            frame_interval: settings.frame_interval,
            should_quit: false,
        }
    }

    /// Attaches the input thread; it is stopped and joined on exit.
    pub fn with_source(mut self, source: LineSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Drains every queued line into the registry and refreshes the averages.
    ///
    /// Returns the number of lines taken off the queue.
    pub fn ingest(&mut self, now: i64) -> usize {
        let mut taken = 0;
        for line in self.lines.drain() {
            self.state.ingest_line(&line, now);
            taken += 1;
        }
        self.state.refresh(now);
        taken
    }

    /// Runs the TUI application.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e);
            }
        };

        info!(
            stale_secs = self.state.stale_secs,
            colors = self.state.colors,
            "dashboard started"
        );
        let result = self.event_loop(&mut terminal);

        // The input thread must be gone before the terminal is handed back.
        if let Some(source) = self.source.take() {
            source.stop();
        }

        // Restore terminal
        let restored = restore_terminal(&mut terminal);
        info!(
            devices = self.state.registry.len(),
            lines = self.state.stats.lines,
            discarded = self.state.stats.discarded,
            dropped = self.state.stats.dropped,
            "dashboard stopped"
        );
        result.and(restored)
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            self.frame(terminal, chrono::Utc::now().timestamp())?;

            match poll_event()? {
                Some(Event::Key(key)) => self.on_key(key),
                Some(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                }
                None => {}
            }

            if !self.should_quit {
                thread::sleep(self.frame_interval);
            }
        }
        Ok(())
    }

    /// Ingests pending lines and draws one frame as of `now`.
    pub fn frame<B: Backend>(&mut self, terminal: &mut Terminal<B>, now: i64) -> io::Result<()> {
        self.ingest(now);
        terminal.draw(|frame| render(frame, &mut self.state))?;
        Ok(())
    }

    fn on_key(&mut self, key: crossterm::event::KeyEvent) {
        if handle_key(&mut self.state, key) == KeyAction::Quit {
            self.should_quit = true;
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::entry_dew_point;
    use crate::queue::line_channel;
    use crate::registry::CapacityPolicy;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::io::Cursor;
    use std::time::Instant;

    const NOW: i64 = 1_700_000_000;

    fn test_app(settings: &Settings) -> (crate::queue::LineSender, App) {
        let (tx, rx) = line_channel(settings.queue_capacity);
        (tx, App::new(settings, rx))
    }

    #[test]
    fn test_ingest_garden_reading() {
        let (tx, mut app) = test_app(&Settings::default());
        tx.send(
            r#"{"id":"g1","location":"garden","temp":22.5,"humidity":60,"ts":1699999900}"#
                .to_string(),
        );

        assert_eq!(app.ingest(NOW), 1);
        let state = app.state();
        let entry = state.registry.get("g1", "garden").unwrap();
        assert_eq!(entry.timestamp, 1_699_999_900);
        let dew = entry_dew_point(entry).unwrap();
        assert!((dew - 14.3).abs() < 0.1);

        assert_eq!(state.aggregates.garden.mean_temperature, Some(22.5));
        assert_eq!(state.aggregates.garden.mean_humidity, Some(60.0));
        assert_eq!(state.aggregates.garden.devices, 1);
        assert_eq!(state.aggregates.indoor.devices, 0);
    }

    #[test]
    fn test_ingest_drains_in_order() {
        let (tx, mut app) = test_app(&Settings::default());
        tx.send(r#"{"id":"a","temp":10,"ts":100}"#.to_string());
        tx.send("not json".to_string());
        tx.send(r#"{"id":"a","humidity":40,"ts":200}"#.to_string());

        assert_eq!(app.ingest(NOW), 3);
        assert_eq!(app.ingest(NOW), 0);

        let entry = app.state().registry.get("a", "unknown").unwrap();
        assert_eq!(entry.timestamp, 200);
        assert_eq!(entry.temperature, Some(10.0));
        assert_eq!(entry.humidity, Some(40.0));
        assert_eq!(app.state().stats.discarded, 1);
    }

    #[test]
    fn test_ingest_excludes_attic() {
        let (tx, mut app) = test_app(&Settings::default());
        tx.send(r#"{"id":"x","location":"attic","temp":35}"#.to_string());
        tx.send(r#"{"id":"y","location":"ATTIC","temp":35}"#.to_string());

        app.ingest(NOW);
        assert!(app.state().registry.is_empty());
        assert_eq!(app.state().aggregates.indoor.mean_temperature, None);
    }

    #[test]
    fn test_ingest_respects_capacity_policy() {
        let settings = Settings {
            capacity: CapacityPolicy::Bounded(2),
            ..Settings::default()
        };
        let (tx, mut app) = test_app(&settings);
        for id in ["a", "b", "c"] {
            tx.send(format!(r#"{{"id":"{id}","temp":20}}"#));
        }
        tx.send(r#"{"id":"a","temp":22}"#.to_string());

        app.ingest(NOW);
        assert_eq!(app.state().registry.len(), 2);
        assert_eq!(app.state().registry.dropped_new_keys(), 1);
        assert_eq!(
            app.state().registry.get("a", "unknown").unwrap().temperature,
            Some(22.0)
        );
    }

    #[test]
    fn test_frame_then_keys() {
        let (tx, mut app) = test_app(&Settings::default());
        for i in 0..40 {
            tx.send(format!(r#"{{"id":"d{i:02}","temp":20}}"#));
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        app.frame(&mut terminal, NOW).unwrap();
        assert_eq!(app.state().viewport.total_rows, 40);

        app.on_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert_eq!(app.state().scroll.offset(), 10);
        assert!(!app.should_quit);

        app.on_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_source_feeds_app() {
        let settings = Settings::default();
        let (tx, mut app) = test_app(&settings);
        let input = Cursor::new(
            b"{\"id\":\"k1\",\"location\":\"kitchen\",\"temp\":21}\n\
              {\"id\":\"g1\",\"location\":\"garden\",\"temp\":15}\n"
                .to_vec(),
        );
        let source = LineSource::spawn(input, tx).unwrap();
        app = app.with_source(source);

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.state().registry.len() < 2 && Instant::now() < deadline {
            app.ingest(NOW);
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(app.state().registry.len(), 2);
        assert_eq!(app.state().aggregates.indoor.mean_temperature, Some(21.0));
        assert_eq!(app.state().aggregates.garden.mean_temperature, Some(15.0));

        if let Some(source) = app.source.take() {
            source.stop();
        }
    }
}
