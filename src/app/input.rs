//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Action, Screen};
use crate::models::CaptureMode;

/// What a key press means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Action(Action),
    /// A digit typed by a keyboard-wedge scanner
    WedgeChar(char),
    /// Enter completing a wedge line
    WedgeEnter,
    WedgeBackspace,
    Ignored,
}

/// Map a key event to an input for `screen`.
pub fn map_key(key: KeyEvent, screen: Screen) -> KeyInput {
    if key.kind != KeyEventKind::Press {
        return KeyInput::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyInput::Action(Action::Quit),
            _ => KeyInput::Ignored,
        };
    }

    match (screen, key.code) {
        (_, KeyCode::Char('q')) => KeyInput::Action(Action::Quit),
        (_, KeyCode::Char('t')) => KeyInput::Action(Action::ToggleTheme),
        (_, KeyCode::Char('x')) => KeyInput::Action(Action::DismissError),

        (Screen::Home, KeyCode::Enter | KeyCode::Char('s')) => KeyInput::Action(Action::StartScan),

        (Screen::Scanning, KeyCode::Char(c)) if c.is_ascii_digit() => KeyInput::WedgeChar(c),
        (Screen::Scanning, KeyCode::Enter) => KeyInput::WedgeEnter,
        (Screen::Scanning, KeyCode::Backspace) => KeyInput::WedgeBackspace,
        (Screen::Scanning, KeyCode::Char('b')) => {
            KeyInput::Action(Action::SwitchMode(CaptureMode::Barcode))
        }
        (Screen::Scanning, KeyCode::Char('l')) => {
            KeyInput::Action(Action::SwitchMode(CaptureMode::Label))
        }
        (Screen::Scanning, KeyCode::Char(' ')) => KeyInput::Action(Action::CaptureStill),

        (Screen::Result, KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('s')) => {
            KeyInput::Action(Action::ScanAgain)
        }
        (Screen::Result, KeyCode::Char('i')) => KeyInput::Action(Action::ToggleIngredients),

        (Screen::Scanning | Screen::Result, KeyCode::Char('h') | KeyCode::Esc) => {
            KeyInput::Action(Action::GoHome)
        }

        _ => KeyInput::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_global_keys() {
        for screen in [Screen::Home, Screen::Scanning, Screen::Result] {
            assert_eq!(
                map_key(key(KeyCode::Char('q')), screen),
                KeyInput::Action(Action::Quit)
            );
            assert_eq!(
                map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), screen),
                KeyInput::Action(Action::Quit)
            );
            assert_eq!(
                map_key(key(KeyCode::Char('t')), screen),
                KeyInput::Action(Action::ToggleTheme)
            );
        }
    }

    #[test]
    fn test_home_keys() {
        assert_eq!(
            map_key(key(KeyCode::Enter), Screen::Home),
            KeyInput::Action(Action::StartScan)
        );
        assert_eq!(map_key(key(KeyCode::Char('1')), Screen::Home), KeyInput::Ignored);
        assert_eq!(map_key(key(KeyCode::Esc), Screen::Home), KeyInput::Ignored);
    }

    #[test]
    fn test_scanning_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('7')), Screen::Scanning),
            KeyInput::WedgeChar('7')
        );
        assert_eq!(map_key(key(KeyCode::Enter), Screen::Scanning), KeyInput::WedgeEnter);
        assert_eq!(
            map_key(key(KeyCode::Char('l')), Screen::Scanning),
            KeyInput::Action(Action::SwitchMode(CaptureMode::Label))
        );
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), Screen::Scanning),
            KeyInput::Action(Action::CaptureStill)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), Screen::Scanning),
            KeyInput::Action(Action::GoHome)
        );
    }

    #[test]
    fn test_result_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), Screen::Result),
            KeyInput::Action(Action::ScanAgain)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('i')), Screen::Result),
            KeyInput::Action(Action::ToggleIngredients)
        );
        assert_eq!(map_key(key(KeyCode::Char('5')), Screen::Result), KeyInput::Ignored);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, Screen::Home), KeyInput::Ignored);
    }
}
