//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined and the averages
//! chart embedded as SVG.

use anyhow::Result;

use gradebook_core::report::ReportModel;
use gradebook_core::traits::ReportRenderer;

use crate::chart::generate_bar_chart;
use crate::escape;

/// Renders reports as standalone HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    chart_title: String,
}

impl HtmlRenderer {
    pub fn new(chart_title: impl Into<String>) -> Self {
        Self {
            chart_title: chart_title.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CHART_TITLE)
    }
}

impl ReportRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, report: &ReportModel) -> Result<String> {
        Ok(generate_html(report, &self.chart_title))
    }
}

/// Generate an HTML document from a report model.
pub fn generate_html(report: &ReportModel, chart_title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&report.title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&report.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} students | generated {}</p>\n",
        report.lines.len(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Text summary
    html.push_str("<section class=\"summary\">\n");
    html.push_str("<h2>Students</h2>\n");
    if report.lines.is_empty() {
        html.push_str("<p class=\"empty\">No students.</p>\n");
    } else {
        html.push_str("<ol class=\"lines\">\n");
        for line in &report.lines {
            html.push_str(&format!("<li>{}</li>\n", escape(line)));
        }
        html.push_str("</ol>\n");
    }
    html.push_str("</section>\n");

    // Chart
    html.push_str("<section class=\"chart\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(chart_title)));
    html.push_str(&generate_bar_chart(&report.series, chart_title));
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --muted: #6b7280; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --muted: #9ca3af; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .empty { color: var(--muted); }
ol.lines { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.9rem; line-height: 1.6; }
ol.lines li { border-bottom: 1px solid var(--border); }
svg { margin: 1rem 0; max-width: 100%; }
@media print { body { padding: 0; } svg { page-break-inside: avoid; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::parser::demo_roster;
    use gradebook_core::registry::Registry;
    use gradebook_core::report::{build, build_titled};

    fn demo_report() -> ReportModel {
        let mut reg = Registry::new();
        reg.import(&demo_roster()).unwrap();
        build(reg.all())
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&demo_report(), "Student Averages");

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<title>Student Grade Report</title>"));
        assert!(html.contains("Name: Alice | Grades: 85, 92, 78 | Average: 85.00"));
        assert!(html.contains("<svg"));
        assert!(html.contains("Student Averages"));
        assert_eq!(html.matches("<li>").count(), 4);
    }

    #[test]
    fn user_text_is_escaped() {
        let mut reg = Registry::new();
        reg.add("<script>alert(1)</script>", "90").unwrap();
        let html = generate_html(&build_titled(reg.all(), "A & B"), "Chart");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn empty_report_renders() {
        let report = build(std::iter::empty::<&gradebook_core::StudentRecord>());
        let html = HtmlRenderer::default().render(&report).unwrap();
        assert!(html.contains("No students."));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = demo_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        HtmlRenderer::new("Averages").write_to(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
        assert!(content.contains("Charlie"));
    }
}
