// Rust guideline compliant 2026-10-18

//! Table rendering for console output.

use tabled::{builder::Builder, settings::Style};

/// A table with optional headers and rows of cells.
///
/// Rows may have different lengths; short rows are padded with empty cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the header row.
    pub fn set_headers(&mut self, headers: Option<Vec<String>>) -> &mut Self {
        self.headers = headers;
        self
    }

    /// Replaces all data rows.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) -> &mut Self {
        self.rows = rows;
        self
    }

    /// Renders the table as ASCII art, without a trailing newline.
    ///
    /// # Returns
    /// The rendered table, or an empty string when there is nothing to show
    pub fn render(&self) -> String {
        if self.headers.is_none() && self.rows.is_empty() {
            return String::new();
        }

        let mut builder = Builder::default();
        if let Some(headers) = &self.headers {
            builder.push_record(headers.iter().map(String::as_str));
        }
        for row in &self.rows {
            builder.push_record(row.iter().map(String::as_str));
        }

        let mut table = builder.build();
        table.with(Style::ascii());
        table.to_string()
    }
}
