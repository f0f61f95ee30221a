//! Plain text and JSON output.

use anyhow::{Context, Result};

use gradebook_core::report::ReportModel;
use gradebook_core::traits::ReportRenderer;

/// Title, blank line, one line per student.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, report: &ReportModel) -> Result<String> {
        Ok(report.to_text())
    }
}

/// The report model itself, as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, report: &ReportModel) -> Result<String> {
        serde_json::to_string_pretty(report).context("failed to serialize report")
    }
}
