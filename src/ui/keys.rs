//! Key translation for the TUI
//!
//! Maps raw key codes to `AppEvent` per mode. In Input mode printable keys
//! type into the focused field, so command keys there are limited to
//! non-printing ones; Result mode is free to use letters.

use crossterm::event::KeyCode;

use crate::app::{AppEvent, AppMode};

/// Translate a key press into an application event.
pub fn key_to_event(mode: AppMode, key: KeyCode) -> AppEvent {
    match mode {
        AppMode::Input => match key {
            KeyCode::Char(c) => AppEvent::TypeChar(c),
            KeyCode::Backspace => AppEvent::DeleteChar,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => AppEvent::SwitchFocus,
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Esc => AppEvent::Quit,
            _ => AppEvent::None,
        },
        AppMode::Result => match key {
            KeyCode::Char('s') => AppEvent::ToggleSteps,
            KeyCode::Char('n') | KeyCode::Enter => AppEvent::NewMatch,
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}
