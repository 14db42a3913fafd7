#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Collecting the two names.
    Input,
    /// Showing the match result.
    Result,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_enum_exists() {
        let _mode = AppMode::Input;
        let _mode = AppMode::Result;
        let _mode = AppMode::Quit;
    }
}
