//! Grade text and TOML roster parsing.
//!
//! Grade text is what a user types into a form: comma separated integers
//! such as `"85, 92, 78"`. Rosters are TOML files that list students in the
//! same textual form so they go through exactly the same checks as typed input.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::model::GradeSet;

/// Parse comma separated grade text into a [`GradeSet`].
///
/// Tokens are trimmed and empty tokens are skipped, so `"85,, 90,"` holds two
/// grades and blank text yields an empty set. Negative values are clamped to
/// 0. Any other token rejects the whole input, including integers outside
/// the 32-bit signed range.
pub fn parse_grades(text: &str) -> Result<GradeSet, RegistryError> {
    let grades = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| RegistryError::InvalidGrade {
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GradeSet::from_raw(grades))
}

/// A named list of students to seed a registry with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Human-readable roster name.
    pub name: String,
    /// Students in file order.
    pub students: Vec<RosterEntry>,
}

/// One student as written in a roster, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Raw grade text, parsed by [`parse_grades`] on import.
    pub grades: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, grades: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: grades.into(),
        }
    }
}

/// The four sample students the tracker starts with in demo mode.
pub fn demo_roster() -> Roster {
    Roster {
        name: "Demo".into(),
        students: vec![
            RosterEntry::new("Alice", "85, 92, 78"),
            RosterEntry::new("Bob", "70, 66, 77"),
            RosterEntry::new("Charlie", "95, 90, 93"),
            RosterEntry::new("Dana", "58, 64, 70"),
        ],
    }
}

/// Intermediate TOML structure for roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    #[serde(default)]
    roster: Option<TomlRosterHeader>,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
    #[serde(default)]
    grades: TomlGrades,
}

/// Grades may be written as text (`"85, 92"`) or as a TOML array (`[85, 92]`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlGrades {
    Text(String),
    List(Vec<i64>),
}

impl Default for TomlGrades {
    fn default() -> Self {
        TomlGrades::Text(String::new())
    }
}

impl TomlGrades {
    fn into_text(self) -> String {
        match self {
            TomlGrades::Text(text) => text,
            TomlGrades::List(list) => list
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Parse a single roster TOML file.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse roster TOML from a string. `source_path` is used for messages and
/// as the fallback roster name.
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let name = match parsed.roster {
        Some(header) => header.name,
        None => source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let students = parsed
        .students
        .into_iter()
        .map(|s| RosterEntry {
            name: s.name,
            grades: s.grades.into_text(),
        })
        .collect();

    Ok(Roster { name, students })
}

/// Recursively load all `.toml` rosters under a directory, in path order.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_roster_directory(dir: &Path) -> Result<Vec<Roster>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    let mut rosters = Vec::new();
    for path in paths {
        if path.is_dir() {
            rosters.extend(load_roster_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_roster(&path) {
                Ok(roster) => rosters.push(roster),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(rosters)
}

/// Load a roster file, or every roster under a directory.
pub fn load_rosters(path: &Path) -> Result<Vec<Roster>> {
    if path.is_dir() {
        load_roster_directory(path)
    } else {
        Ok(vec![parse_roster(path)?])
    }
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student the warning is about, if any.
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a roster for entries that will be rejected or look suspicious.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if roster.students.is_empty() {
        warnings.push(ValidationWarning {
            student: None,
            message: "roster has no students".into(),
        });
    }

    for (i, entry) in roster.students.iter().enumerate() {
        let label = if entry.name.trim().is_empty() {
            format!("entry {}", i + 1)
        } else {
            entry.name.trim().to_string()
        };

        if entry.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                student: Some(label.clone()),
                message: "name is empty and will be rejected".into(),
            });
        }

        match parse_grades(&entry.grades) {
            Ok(grades) if grades.is_empty() => warnings.push(ValidationWarning {
                student: Some(label),
                message: "no grades listed".into(),
            }),
            Ok(_) => {}
            Err(e) => warnings.push(ValidationWarning {
                student: Some(label),
                message: format!("{e}; the roster will not import"),
            }),
        }
    }

    // Duplicate names are legal but usually a typo.
    let mut seen: HashMap<String, usize> = HashMap::new();
    for entry in &roster.students {
        let key = entry.name.trim().to_lowercase();
        if !key.is_empty() {
            *seen.entry(key).or_default() += 1;
        }
    }
    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicates.sort();
    for (name, count) in duplicates {
        warnings.push(ValidationWarning {
            student: Some(name.clone()),
            message: format!("name appears {count} times"),
        });
    }

    warnings
}
