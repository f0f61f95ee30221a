//! gradebook-report: Export adapters for gradebook reports.
//!
//! Each format implements [`ReportRenderer`] over the core's
//! [`ReportModel`](gradebook_core::report::ReportModel).

pub mod chart;
pub mod html;
pub mod svg;
pub mod text;

use anyhow::Result;

use gradebook_core::traits::ReportRenderer;

pub use html::HtmlRenderer;
pub use svg::SvgRenderer;
pub use text::{JsonRenderer, TextRenderer};

/// Chart title used when none is configured.
pub const DEFAULT_CHART_TITLE: &str = "Student Averages";

/// Every format [`create_renderer`] understands.
pub const FORMATS: [&str; 4] = ["text", "json", "html", "svg"];

/// Create a renderer by format name.
pub fn create_renderer(format: &str, chart_title: &str) -> Result<Box<dyn ReportRenderer>> {
    match format.trim().to_lowercase().as_str() {
        "text" | "txt" => Ok(Box::new(TextRenderer)),
        "json" => Ok(Box::new(JsonRenderer)),
        "html" => Ok(Box::new(HtmlRenderer::new(chart_title))),
        "svg" | "chart" => Ok(Box::new(SvgRenderer::new(chart_title))),
        other => anyhow::bail!(
            "unknown format: {other} (expected one of: {})",
            FORMATS.join(", ")
        ),
    }
}

/// Expand a comma separated format list; `all` means every format.
pub fn parse_formats(list: &str) -> Result<Vec<String>> {
    let mut formats = Vec::new();
    for raw in list.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        if raw.eq_ignore_ascii_case("all") {
            formats.extend(FORMATS.iter().map(|f| f.to_string()));
        } else {
            formats.push(raw.to_lowercase());
        }
    }
    let mut seen = std::collections::HashSet::new();
    formats.retain(|f| seen.insert(f.clone()));
    anyhow::ensure!(!formats.is_empty(), "no output format given");
    Ok(formats)
}

/// Escape a string for safe HTML/SVG insertion.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
