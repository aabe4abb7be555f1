use std::fmt::Write;

use crate::error::Result;

use super::table::{Alignment, Table};
use super::{ListReport, ReportFormatter};

/// Placeholder for per-rule and per-folder overrides that are not set.
const NOT_SET: &str = "<not set>";

pub struct TextFormatter;

impl TextFormatter {
    fn duration_cell(value: Option<crate::duration::AgeSpan>) -> String {
        value.map_or_else(|| NOT_SET.to_string(), |span| span.to_string())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ListReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Exp/Keep: {} {}",
            Self::duration_cell(report.expire),
            Self::duration_cell(report.keep)
        );

        let mut table = Table::new()
            .column("#", Alignment::Right)
            .column("Pattern", Alignment::Left)
            .column("Expire", Alignment::Left)
            .column("Keep", Alignment::Left);
        if report.effective {
            table = table.column("From", Alignment::Left);
        }

        for entry in &report.rules {
            let mut cells = vec![
                entry.position.to_string(),
                entry.pattern.clone(),
                Self::duration_cell(entry.expire),
                Self::duration_cell(entry.keep),
            ];
            if report.effective {
                cells.push(entry.from.clone().unwrap_or_default());
            }
            table.row(cells);
        }

        output.push_str(&table.render());
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
