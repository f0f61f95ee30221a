//! Report model assembly with JSON persistence.
//!
//! A [`ReportModel`] is renderer-agnostic: formatted text lines plus one named
//! chart series. Turning it into HTML, SVG or anything else is the job of a
//! [`ReportRenderer`](crate::traits::ReportRenderer).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::StudentRecord;

/// Title used when no configuration overrides it.
pub const DEFAULT_TITLE: &str = "Student Grade Report";

/// Name of the chart series built from student averages.
pub const AVERAGE_SERIES: &str = "Average";

/// A finished report, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    /// Document title.
    pub title: String,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// One formatted line per student, in view order.
    pub lines: Vec<String>,
    /// Student averages, in the same order as `lines`.
    pub series: ChartSeries,
}

/// A named sequence of labelled values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Format the report line for one student.
///
/// `Name: Alice | Grades: 85, 92, 78 | Average: 85.00 | Highest: 92 | Lowest: 78`
pub fn format_line(record: &StudentRecord) -> String {
    let grades = record.grades();
    format!(
        "Name: {} | Grades: {} | Average: {:.2} | Highest: {} | Lowest: {}",
        record.name(),
        grades,
        grades.rounded_average(),
        grades.highest(),
        grades.lowest()
    )
}

/// Build a report over `records`, keeping their order.
///
/// Total: an empty input gives a report with no lines and an empty series.
pub fn build<'a, I>(records: I) -> ReportModel
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    build_titled(records, DEFAULT_TITLE)
}

/// Like [`build`], with a custom title.
pub fn build_titled<'a, I>(records: I, title: &str) -> ReportModel
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let mut lines = Vec::new();
    let mut points = Vec::new();

    for record in records {
        lines.push(format_line(record));
        points.push(SeriesPoint {
            label: record.name().to_string(),
            value: record.grades().rounded_average(),
        });
    }

    ReportModel {
        title: title.to_string(),
        generated_at: Utc::now(),
        lines,
        series: ChartSeries {
            name: AVERAGE_SERIES.to_string(),
            points,
        },
    }
}

impl ReportModel {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text document: title, a blank line, then one line per student.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.title);
        text.push_str("\n\n");
        if self.lines.is_empty() {
            text.push_str("(no students)\n");
        }
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ReportModel =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortKey;
    use crate::parser::demo_roster;
    use crate::registry::Registry;
    use crate::view::View;

    #[test]
    fn alice_line_and_series() {
        let mut reg = Registry::new();
        reg.add("Alice", "85, 92, 78").unwrap();

        let report = build(reg.all());
        assert_eq!(
            report.lines,
            vec!["Name: Alice | Grades: 85, 92, 78 | Average: 85.00 | Highest: 92 | Lowest: 78"]
        );
        assert_eq!(report.series.name, "Average");
        assert_eq!(
            report.series.points,
            vec![SeriesPoint {
                label: "Alice".into(),
                value: 85.0
            }]
        );
    }

    #[test]
    fn averages_round_to_two_places() {
        let mut reg = Registry::new();
        reg.add("Charlie", "95, 90, 93").unwrap();
        let report = build(reg.all());
        assert!(report.lines[0].contains("Average: 92.67"));
        assert_eq!(report.series.points[0].value, 92.67);
    }

    #[test]
    fn half_hundredth_averages_round_up_in_line_and_series() {
        let grades = [vec!["1"; 23], vec!["0"; 17]].concat().join(", ");
        let mut reg = Registry::new();
        reg.add("Low", &grades).unwrap();

        let report = build(reg.all());
        assert!(report.lines[0].contains("Average: 0.58 |"), "{}", report.lines[0]);
        assert_eq!(report.series.points[0].value, 0.58);
    }

    #[test]
    fn student_without_grades() {
        let mut reg = Registry::new();
        reg.add("Eve", "").unwrap();
        let report = build(reg.all());
        assert_eq!(
            report.lines[0],
            "Name: Eve | Grades:  | Average: 0.00 | Highest: 0 | Lowest: 0"
        );
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = build(std::iter::empty::<&StudentRecord>());
        assert!(report.is_empty());
        assert!(report.series.points.is_empty());
        assert_eq!(report.title, DEFAULT_TITLE);
        assert!(report.to_text().contains("(no students)"));
    }

    #[test]
    fn report_follows_view_order() {
        let mut reg = Registry::new();
        reg.import(&demo_roster()).unwrap();
        let view = View::new("", Some(SortKey::AverageDesc));
        let report = build_titled(view.apply(reg.all()), "Ranked");

        let labels: Vec<_> = report.series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Charlie", "Alice", "Bob", "Dana"]);
        assert!(report.lines[0].starts_with("Name: Charlie |"));
        assert_eq!(report.lines.len(), report.series.points.len());
        assert!(report.to_text().starts_with("Ranked\n\n"));
    }

    #[test]
    fn json_roundtrip() {
        let mut reg = Registry::new();
        reg.import(&demo_roster()).unwrap();
        let report = build(reg.all());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        report.save_json(&path).unwrap();
        let loaded = ReportModel::load_json(&path).unwrap();

        assert_eq!(loaded.title, report.title);
        assert_eq!(loaded.generated_at, report.generated_at);
        assert_eq!(loaded.lines, report.lines);
        assert_eq!(loaded.series.points.len(), 4);
        for (a, b) in loaded.series.points.iter().zip(&report.series.points) {
            assert_eq!(a.label, b.label);
            assert!((a.value - b.value).abs() < 1e-9);
        }
    }
}
