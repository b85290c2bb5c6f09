//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;
use crate::table::PAGE_STEP;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(1);
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(1);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.scroll_down(PAGE_STEP);
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.scroll_up(PAGE_STEP);
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::table::Viewport;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_rows(total: usize, visible: usize) -> AppState {
        let mut state = AppState::new(&Settings::default());
        state.viewport = Viewport {
            total_rows: total,
            visible_rows: visible,
        };
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state_with_rows(0, 0);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('Q'))), KeyAction::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyAction::Quit
        );
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('c'))), KeyAction::None);
    }

    #[test]
    fn test_scroll_keys() {
        let mut state = state_with_rows(40, 10);
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.scroll.offset(), 2);
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll.offset(), 12);
        handle_key(&mut state, key(KeyCode::PageDown));
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll.offset(), 30);
        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.scroll.offset(), 29);
        handle_key(&mut state, key(KeyCode::Up));
        handle_key(&mut state, key(KeyCode::PageUp));
        assert_eq!(state.scroll.offset(), 18);
        for _ in 0..3 {
            handle_key(&mut state, key(KeyCode::PageUp));
        }
        assert_eq!(state.scroll.offset(), 0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = state_with_rows(40, 10);
        for code in [
            KeyCode::Char('x'),
            KeyCode::Enter,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Esc,
        ] {
            assert_eq!(handle_key(&mut state, key(code)), KeyAction::None);
        }
        assert_eq!(state.scroll.offset(), 0);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = state_with_rows(40, 10);
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(&mut state, release), KeyAction::None);
    }
}
