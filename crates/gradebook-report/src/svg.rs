//! Standalone SVG chart output.

use anyhow::Result;

use gradebook_core::report::ReportModel;
use gradebook_core::traits::ReportRenderer;

use crate::chart::generate_bar_chart;

/// Renders only the averages chart, as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    chart_title: String,
}

impl SvgRenderer {
    pub fn new(chart_title: impl Into<String>) -> Self {
        Self {
            chart_title: chart_title.into(),
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CHART_TITLE)
    }
}

impl ReportRenderer for SvgRenderer {
    fn name(&self) -> &str {
        "svg"
    }

    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, report: &ReportModel) -> Result<String> {
        let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        doc.push_str(&generate_bar_chart(&report.series, &self.chart_title));
        Ok(doc)
    }
}
