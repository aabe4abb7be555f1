//! Minimal aligned console table.

use std::fmt::Write;

/// Horizontal alignment of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Column-aligned text table: a header row, a separator, and data rows.
/// Column widths adapt to the widest cell.
#[derive(Debug, Default)]
pub struct Table {
    columns: Vec<(String, Alignment)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column(mut self, header: &str, alignment: Alignment) -> Self {
        self.columns.push((header.to_string(), alignment));
        self
    }

    /// Append a data row. Missing cells render empty; extra cells are
    /// dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut output = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|(h, _)| h.as_str()).collect();
        self.render_row(&mut output, &headers, &widths);

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let separator: Vec<&str> = separator.iter().map(String::as_str).collect();
        self.render_row(&mut output, &separator, &widths);

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map_or("", String::as_str))
                .collect();
            self.render_row(&mut output, &cells, &widths);
        }

        output
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_row(&self, output: &mut String, cells: &[&str], widths: &[usize]) {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            let width = widths.get(i).copied().unwrap_or(0);
            let padding = width.saturating_sub(cell.chars().count());
            match self.columns.get(i).map_or(Alignment::Left, |(_, a)| *a) {
                Alignment::Left => {
                    line.push_str(cell);
                    line.push_str(&" ".repeat(padding));
                }
                Alignment::Right => {
                    line.push_str(&" ".repeat(padding));
                    line.push_str(cell);
                }
            }
        }
        let _ = writeln!(output, "{}", line.trim_end());
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
