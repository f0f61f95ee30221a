//! Trait definitions for report export adapters.
//!
//! The core only builds [`ReportModel`]s. Renderers in `gradebook-report`
//! implement [`ReportRenderer`] to turn them into documents.

use std::path::Path;

use anyhow::{Context, Result};

use crate::report::ReportModel;

/// Turns a report model into a text document (HTML, SVG, plain text, ...).
pub trait ReportRenderer {
    /// Short format name, e.g. "html".
    fn name(&self) -> &str;

    /// File extension for rendered output, without the dot.
    fn extension(&self) -> &str;

    /// Render the whole report.
    fn render(&self, report: &ReportModel) -> Result<String>;

    /// Render and write to `path`, creating parent directories.
    fn write_to(&self, report: &ReportModel, path: &Path) -> Result<()> {
        let rendered = self.render(report)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {} report to {}", self.name(), path.display()))?;
        tracing::info!(format = self.name(), path = %path.display(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build;

    struct LineCount;

    impl ReportRenderer for LineCount {
        fn name(&self) -> &str {
            "count"
        }

        fn extension(&self) -> &str {
            "txt"
        }

        fn render(&self, report: &ReportModel) -> Result<String> {
            Ok(format!("{} lines", report.lines.len()))
        }
    }

    #[test]
    fn write_to_creates_parent_dirs() {
        let report = build(std::iter::empty::<&crate::model::StudentRecord>());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/deeper/report.txt");

        LineCount.write_to(&report, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 lines");
    }

    #[test]
    fn write_to_names_the_directory_it_cannot_create() {
        let report = build(std::iter::empty::<&crate::model::StudentRecord>());
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let err = LineCount
            .write_to(&report, &blocker.join("report.txt"))
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to create directory"), "{msg}");
        assert!(msg.contains("taken"), "{msg}");
    }
}
