use ratatui::style::Color;

/// Ember theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub ember: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ember()
    }
}

impl Theme {
    /// Dark theme with a flame-orange accent
    pub fn ember() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),  // #1A1B26 near-black blue
            surface: Color::Rgb(36, 40, 59),     // #24283B raised panels
            text: Color::Rgb(192, 202, 245),     // #C0CAF5 pale blue
            ember: Color::Rgb(255, 158, 100),    // #FF9E64 flame orange
            dimmed: Color::Rgb(86, 95, 137),     // #565F89 muted blue
        }
    }

    /// Default theme is ember
    pub fn current() -> Self {
        Self::ember()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn ember() -> Color {
        Theme::current().ember
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
