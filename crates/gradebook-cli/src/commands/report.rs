//! The `gradebook report` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::config::load_config_from;
use gradebook_core::report::build_titled;
use gradebook_core::view::View;
use gradebook_report::{create_renderer, parse_formats};

use crate::commands::{load_registry, parse_sort, student_table, text_chart};

/// Options for a one-shot report.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub roster: Option<PathBuf>,
    pub demo: bool,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub no_export: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    anyhow::ensure!(
        args.roster.is_some() || args.demo,
        "nothing to report: pass --roster PATH or --demo"
    );

    let config = load_config_from(args.config.as_deref())?;
    let registry = load_registry(args.roster.as_deref(), args.demo)?;

    let sort = parse_sort(args.sort.as_deref())?.or(config.default_sort);
    let view = View::new(args.search.unwrap_or_default(), sort);
    let records = view.apply(registry.all());

    println!("{}", student_table(&records));
    println!(
        "{} of {} students ({})\n",
        records.len(),
        registry.len(),
        view.describe()
    );

    let report = build_titled(records, &config.report_title);
    print!("{}", report.to_text());
    println!();
    print!("{}", text_chart(&report.series, &config.chart_title));

    if args.no_export {
        return Ok(());
    }

    let formats = match &args.format {
        Some(list) => parse_formats(list)?,
        None => config.formats.clone(),
    };
    // Fail on a bad format before anything is written.
    let renderers = formats
        .iter()
        .map(|f| create_renderer(f, &config.chart_title))
        .collect::<Result<Vec<_>>>()?;

    let output = args.output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;
    let timestamp = report.generated_at.format("%Y-%m-%dT%H%M%S");

    for renderer in &renderers {
        let path = output.join(format!("report-{timestamp}.{}", renderer.extension()));
        renderer.write_to(&report, &path)?;
        eprintln!("{} report: {}", renderer.name(), path.display());
    }

    Ok(())
}
