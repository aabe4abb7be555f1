mod json;
mod report;
mod table;
mod text;

pub use json::JsonFormatter;
pub use report::{ListReport, RuleEntry};
pub use table::{Alignment, Table};
pub use text::TextFormatter;

use clap::ValueEnum;

use crate::error::Result;

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned console table
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

pub trait ReportFormatter {
    /// Render a list report to a printable string.
    ///
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &ListReport) -> Result<String>;
}
