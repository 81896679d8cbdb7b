//! Styled output functions for the acli CLI

use super::theme::{Color, Theme};

/// Styled output writer
pub struct StyledOutput {
    theme: Theme,
}

impl StyledOutput {
    /// Create a new styled output with the given theme
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Create with default theme
    pub fn default_theme() -> Self {
        Self::new(Theme::default())
    }

    /// Print a success message (green)
    pub fn success(&self, text: &str) {
        println!("{}", self.theme.apply(Color::Success, text));
    }

    /// Print a warning message (yellow)
    pub fn warning(&self, text: &str) {
        println!("{}", self.theme.apply(Color::Warning, text));
    }

    /// Print an error message (red) to stderr
    pub fn error(&self, text: &str) {
        eprintln!("{}", self.theme.apply(Color::Error, text));
    }

    /// Print unstyled text
    pub fn plain(&self, text: &str) {
        println!("{}", text);
    }

    /// Get the underlying theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for StyledOutput {
    fn default() -> Self {
        Self::default_theme()
    }
}
