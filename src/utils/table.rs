//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so accented or wide characters
//! in company names keep the columns aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells longer than this are truncated with an ellipsis.
const MAX_CELL: usize = 40;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row.into_iter().map(|c| truncate(&c, MAX_CELL)).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths in terminal cells.
    pub fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render rows; `decorate(row, col, padded_cell)` may colorize a cell
    /// after padding so escapes do not disturb alignment.
    pub fn render_with<F>(&self, separator: &str, decorate: F) -> String
    where
        F: Fn(usize, usize, String) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(h, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let sep = separator.chars().next().unwrap_or('-').to_string();
        out.push_str(&sep.repeat(total));
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(c, w)| {
                    let cell = row.get(c).map(String::as_str).unwrap_or("");
                    decorate(r, c, pad_right(cell, *w))
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }

    pub fn render(&self, separator: &str) -> String {
        self.render_with(separator, |_, _, cell| cell)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// Shorten `s` to at most `max` terminal columns.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_on_display_width() {
        let mut t = Table::new(["Company", "Status"]);
        t.add_row(vec!["Zürich AG".into(), "Offer".into()]);
        t.add_row(vec!["Acme".into(), "Applied".into()]);

        let out = t.render("-");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Company    Status"));
        assert!(lines[2].starts_with("Zürich AG  Offer"));
        assert!(lines[3].starts_with("Acme       Applied"));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(100);
        let t = truncate(&long, 10);
        assert_eq!(t.width(), 10);
        assert!(t.ends_with('…'));
    }
}
