use thiserror::Error;

use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::{play_match, MatchReport};

/// Which name field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    First,
    Second,
}

impl Focus {
    pub fn other(self) -> Self {
        match self {
            Focus::First => Focus::Second,
            Focus::Second => Focus::First,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter the first name (non-empty)")]
    BlankFirst,

    #[error("please enter the second name (non-empty)")]
    BlankSecond,
}

/// Reject blank names before the match runs.
///
/// The match itself accepts any string; this guard exists so the user gets
/// told about an empty field rather than a silent strong-bond result.
pub fn validate_names(first: &str, second: &str) -> Result<(), InputError> {
    if first.trim().is_empty() {
        return Err(InputError::BlankFirst);
    }
    if second.trim().is_empty() {
        return Err(InputError::BlankSecond);
    }
    Ok(())
}

pub struct App {
    pub mode: AppMode,
    pub first_name: String,
    pub second_name: String,
    pub focus: Focus,
    pub show_steps: bool,
    pub report: Option<MatchReport>,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Input,
            first_name: String::new(),
            second_name: String::new(),
            focus: Focus::First,
            show_steps: false,
            report: None,
            status: None,
        }
    }

    fn focused_name_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::First => &mut self.first_name,
            Focus::Second => &mut self.second_name,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TypeChar(c) => {
                self.focused_name_mut().push(c);
                self.status = None;
            }
            AppEvent::DeleteChar => {
                self.focused_name_mut().pop();
            }
            AppEvent::SwitchFocus => {
                self.focus = self.focus.other();
            }
            AppEvent::Submit => self.submit(),
            AppEvent::ToggleSteps => {
                self.show_steps = !self.show_steps;
            }
            AppEvent::NewMatch => {
                // Names are kept so a typo can be fixed without retyping both
                self.report = None;
                self.status = None;
                self.focus = Focus::First;
                self.mode = AppMode::Input;
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    fn submit(&mut self) {
        match validate_names(&self.first_name, &self.second_name) {
            Ok(()) => {
                // Always trace in the TUI; the steps panel is a toggle away
                self.report = Some(play_match(&self.first_name, &self.second_name, true));
                self.status = None;
                self.mode = AppMode::Result;
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
