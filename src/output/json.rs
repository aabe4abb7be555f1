use crate::error::Result;

use super::{ListReport, ReportFormatter};

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ListReport) -> Result<String> {
        let json = serde_json::to_string_pretty(report)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
