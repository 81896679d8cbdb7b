//! Plain-text table rendering for the `config list` command.

use super::theme::{Color, Theme};

/// A fixed-column table with a title line and box-drawing borders.
///
/// Widths are measured on the raw cell text before any styling is
/// applied, so ANSI escape codes never skew the layout.
pub struct Table {
    theme: Theme,
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given title and column headers
    pub fn new(title: &str, columns: &[&str]) -> Self {
        Self {
            theme: Theme::default(),
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows shorter than the header are padded with blanks;
    /// longer rows are truncated to the header width.
    pub fn add_row(&mut self, cells: &[String]) {
        let mut row: Vec<String> = cells.to_vec();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Render the full table as a string
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::new();

        lines.push(self.theme.apply(Color::Heading, &self.title));
        lines.push(self.border(&widths, "┌", "┬", "┐"));
        lines.push(self.row_line(&widths, &self.columns, Some(Color::Heading)));
        lines.push(self.border(&widths, "├", "┼", "┤"));

        for row in &self.rows {
            lines.push(self.row_line(&widths, row, None));
        }

        lines.push(self.border(&widths, "└", "┴", "┘"));
        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn border(&self, widths: &[usize], left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let line = format!("{}{}{}", left, segments.join(mid), right);
        self.theme.apply(Color::Muted, &line)
    }

    fn row_line(&self, widths: &[usize], cells: &[String], color: Option<Color>) -> String {
        let sep = self.theme.apply(Color::Muted, "│");
        let mut line = sep.clone();
        for (cell, width) in cells.iter().zip(widths.iter().copied()) {
            let padding = " ".repeat(width - cell.chars().count());
            let text = match color {
                Some(c) => self.theme.apply(c, cell),
                None => cell.clone(),
            };
            line.push_str(&format!(" {}{} {}", text, padding, sep));
        }
        line
    }
}
