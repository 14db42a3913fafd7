/// Application events
///
/// Produced by the key translation layer in `ui::keys` and handled by
/// `App::handle_event`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AppEvent {
    /// Append a character to the focused name field.
    TypeChar(char),
    /// Delete the last character of the focused name field.
    DeleteChar,
    /// Move focus to the other name field.
    SwitchFocus,
    /// Validate the names and run the match.
    Submit,
    /// Show or hide the breakdown and elimination steps.
    ToggleSteps,
    /// Return to the form for another match.
    NewMatch,
    Quit,
    None,
}
