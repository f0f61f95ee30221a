//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::SortKey;
use crate::report::DEFAULT_TITLE;

/// Top-level gradebook configuration, read from `gradebook.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Title printed at the top of every report.
    #[serde(default = "default_report_title")]
    pub report_title: String,
    /// Title of the averages bar chart.
    #[serde(default = "default_chart_title")]
    pub chart_title: String,
    /// Sort applied when a command does not ask for one.
    #[serde(default)]
    pub default_sort: Option<SortKey>,
    /// Directory exported reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Formats exported when none are requested.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_report_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_chart_title() -> String {
    "Student Averages".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gradebook-reports")
}
fn default_formats() -> Vec<String> {
    vec!["text".to_string()]
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            report_title: default_report_title(),
            chart_title: default_chart_title(),
            default_sort: None,
            output_dir: default_output_dir(),
            formats: default_formats(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable override: `GRADEBOOK_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => GradebookConfig::default(),
    };

    if let Ok(dir) = std::env::var("GRADEBOOK_OUTPUT_DIR") {
        if !dir.trim().is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse configuration TOML.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.report_title, "Student Grade Report");
        assert_eq!(config.chart_title, "Student Averages");
        assert_eq!(config.default_sort, None);
        assert_eq!(config.formats, vec!["text"]);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
report_title = "Period 3"
default_sort = "average-desc"
formats = ["html", "json"]
"#,
        )
        .unwrap();
        assert_eq!(config.report_title, "Period 3");
        assert_eq!(config.chart_title, "Student Averages");
        assert_eq!(config.default_sort, Some(SortKey::AverageDesc));
        assert_eq!(config.formats, vec!["html", "json"]);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!(parse_config("default_sort = \"median\"").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "chart_title = \"Bars\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.chart_title, "Bars");
    }
}
