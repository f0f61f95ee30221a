//! Subcommand implementations and the helpers they share.

pub mod init;
pub mod report;
pub mod shell;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};

use gradebook_core::model::{SortKey, StudentRecord};
use gradebook_core::parser::{demo_roster, load_rosters};
use gradebook_core::registry::Registry;
use gradebook_core::report::ChartSeries;
use gradebook_core::statistics::snapshot;

/// Build a registry from roster files and/or the demo roster.
pub fn load_registry(roster: Option<&Path>, demo: bool) -> Result<Registry> {
    let mut registry = Registry::new();

    if demo {
        registry.import(&demo_roster())?;
    }

    if let Some(path) = roster {
        for roster in load_rosters(path)? {
            let ids = registry
                .import(&roster)
                .with_context(|| format!("failed to import roster '{}'", roster.name))?;
            tracing::info!(roster = %roster.name, students = ids.len(), "roster loaded");
        }
    }

    Ok(registry)
}

/// Parse an optional sort key typed by the user.
pub fn parse_sort(key: Option<&str>) -> Result<Option<SortKey>> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| k.parse::<SortKey>().map_err(|e| anyhow::anyhow!("{}", e)))
        .transpose()
}

/// The tabular student view: id, name, grades, average, highest, lowest.
pub fn student_table(records: &[&StudentRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Grades", "Average", "Highest", "Lowest"]);

    for snap in snapshot(records.iter().copied()) {
        let grades = snap
            .grades
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(snap.id),
            Cell::new(&snap.name),
            Cell::new(grades),
            Cell::new(format!("{:.2}", snap.average)).set_alignment(CellAlignment::Right),
            Cell::new(snap.highest).set_alignment(CellAlignment::Right),
            Cell::new(snap.lowest).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// A terminal bar chart of a series, one row per point.
pub fn text_chart(series: &ChartSeries, title: &str) -> String {
    const WIDTH: f64 = 40.0;

    let mut out = format!("{title}\n");
    if series.points.is_empty() {
        out.push_str("(no students)\n");
        return out;
    }

    let label_width = series
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.points.iter().map(|p| p.value).fold(100.0, f64::max);

    for point in &series.points {
        let bar = "#".repeat((point.value / max * WIDTH).round() as usize);
        out.push_str(&format!(
            "{:<label_width$}  {:>6.2}  {}\n",
            point.label, point.value, bar
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::report::build;

    #[test]
    fn parse_sort_keys() {
        assert_eq!(parse_sort(None).unwrap(), None);
        assert_eq!(parse_sort(Some("  ")).unwrap(), None);
        assert_eq!(parse_sort(Some("name")).unwrap(), Some(SortKey::NameAsc));
        assert!(parse_sort(Some("median")).is_err());
    }

    #[test]
    fn demo_registry_loads() {
        let registry = load_registry(None, true).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn bad_roster_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(
            &path,
            "[[students]]\nname = \"Ok\"\ngrades = \"1\"\n\n[[students]]\nname = \"Bad\"\ngrades = \"x\"\n",
        )
        .unwrap();
        let err = load_registry(Some(&path), false).unwrap_err();
        assert!(format!("{err:#}").contains("'x'"));
    }

    #[test]
    fn table_lists_every_record() {
        let registry = load_registry(None, true).unwrap();
        let records: Vec<_> = registry.all().iter().collect();
        let rendered = student_table(&records).to_string();
        for name in ["Alice", "Bob", "Charlie", "Dana"] {
            assert!(rendered.contains(name));
        }
        assert!(rendered.contains("92.67"));
    }

    #[test]
    fn chart_bars_scale_with_average() {
        let registry = load_registry(None, true).unwrap();
        let chart = text_chart(&build(registry.all()).series, "Averages");
        let alice = chart.lines().find(|l| l.starts_with("Alice")).unwrap();
        assert!(alice.contains("85.00"));
        assert_eq!(alice.matches('#').count(), 34);
    }
}
