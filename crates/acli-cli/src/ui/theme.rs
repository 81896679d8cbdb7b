//! Theme system for the acli CLI
//!
//! Defines colors and styles in a single place for consistent output.

use console::Style;
use std::env;

/// Color roles for the different kinds of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Success - green
    Success,
    /// Error - red
    Error,
    /// Warning - yellow
    Warning,
    /// Muted/secondary - gray
    Muted,
    /// Titles and table headers - cyan
    Heading,
}

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether colors are enabled (respects NO_COLOR)
    colors_enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create a new theme, honoring the NO_COLOR convention
    pub fn new() -> Self {
        Self {
            colors_enabled: !Self::no_color_env(),
        }
    }

    /// Check if NO_COLOR environment variable is set
    fn no_color_env() -> bool {
        env::var("NO_COLOR").is_ok()
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Get the style for a given color
    pub fn style(&self, color: Color) -> Style {
        if !self.colors_enabled {
            return Style::new();
        }

        match color {
            Color::Success => Style::new().green(),
            Color::Error => Style::new().red().bold(),
            Color::Warning => Style::new().yellow().bold(),
            Color::Muted => Style::new().dim(),
            Color::Heading => Style::new().cyan().bold(),
        }
    }

    /// Apply style to text
    pub fn apply(&self, color: Color, text: &str) -> String {
        self.style(color).apply_to(text).to_string()
    }
}
