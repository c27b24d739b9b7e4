//! Table rendering utilities for CLI outputs.
//!
//! Cells may span several lines (`\n`). Columns with a maximum width wrap
//! their content with `textwrap`; widths are measured in terminal columns so
//! accented scope names and activity lines stay aligned.

use crate::utils::colors::colorize_placeholder;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Maximum width; `0` means "as wide as the content".
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        if !separator.is_empty() {
            self.separator = separator.to_string();
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell_lines(&self, col: usize, cell: &str) -> Vec<String> {
        let max = self.columns[col].width;
        let mut out = Vec::new();
        for raw in cell.split('\n') {
            if max > 0 && raw.width() > max {
                out.extend(textwrap::wrap(raw, max).into_iter().map(|l| l.into_owned()));
            } else {
                out.push(raw.to_string());
            }
        }
        out
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .flat_map(|cell| self.cell_lines(i, cell))
                    .map(|l| l.width())
                    .max()
                    .unwrap_or(0);
                let w = content.max(col.header.width());
                if col.width > 0 { w.min(col.width.max(col.header.width())) } else { w }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&self.separator.repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = (0..self.columns.len())
                .map(|i| self.cell_lines(i, row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for l in 0..height {
                for (i, w) in widths.iter().enumerate() {
                    let text = cells[i].get(l).map(String::as_str).unwrap_or("");
                    let padded = pad(text, *w);
                    // continuation lines stay blank, not greyed
                    if l == 0 {
                        out.push_str(&colorize_placeholder(&padded));
                    } else {
                        out.push_str(&padded);
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
