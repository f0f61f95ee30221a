//! Core data model types for gradebook.
//!
//! A [`StudentRecord`] binds a display name to one immutable [`GradeSet`].
//! Records are owned by the [`Registry`](crate::registry::Registry) and handed
//! out only by shared reference, so nothing outside the registry can change them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier assigned to a student when it is added to a registry.
///
/// Ids come from a per-registry counter and are never reused, so an id held
/// by a stale view can only miss, never hit the wrong student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u64>()
            .map(StudentId)
            .map_err(|_| format!("invalid student id: {}", s.trim()))
    }
}

/// An ordered, immutable sequence of non-negative grades.
///
/// Insertion order is preserved exactly. Statistics are derived on demand
/// (see [`crate::statistics`]); changing grades means building a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeSet(Vec<u32>);

impl GradeSet {
    /// Build a grade set from raw integers, clamping negatives to 0.
    pub fn from_raw<I>(grades: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        Self(grades.into_iter().map(|g| g.max(0) as u32).collect())
    }

    /// The grades in insertion order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for GradeSet {
    fn from(grades: Vec<u32>) -> Self {
        Self(grades)
    }
}

impl fmt::Display for GradeSet {
    /// Grades joined with `", "`, e.g. `85, 92, 78`. Empty sets render as "".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, grade) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{grade}")?;
        }
        Ok(())
    }
}

/// A student: a display name bound to one grade set.
///
/// Only a [`Registry`](crate::registry::Registry) creates these, so there is
/// no `Deserialize`: a loaded record would skip name and grade validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub(crate) id: StudentId,
    pub(crate) name: String,
    pub(crate) grades: GradeSet,
}

impl StudentRecord {
    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &GradeSet {
        &self.grades
    }
}

/// The orderings a view can apply to a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name, A to Z, ignoring case.
    NameAsc,
    /// Average, highest first.
    AverageDesc,
    /// Average, lowest first.
    AverageAsc,
    /// Highest grade, highest first.
    HighestDesc,
    /// Lowest grade, lowest first.
    LowestAsc,
}

impl SortKey {
    /// Every key, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::NameAsc,
        SortKey::AverageDesc,
        SortKey::AverageAsc,
        SortKey::HighestDesc,
        SortKey::LowestAsc,
    ];

    /// Human-readable label for menus and headers.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::AverageDesc => "Average (High→Low)",
            SortKey::AverageAsc => "Average (Low→High)",
            SortKey::HighestDesc => "Highest (High→Low)",
            SortKey::LowestAsc => "Lowest (Low→High)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::NameAsc => write!(f, "name"),
            SortKey::AverageDesc => write!(f, "average-desc"),
            SortKey::AverageAsc => write!(f, "average-asc"),
            SortKey::HighestDesc => write!(f, "highest-desc"),
            SortKey::LowestAsc => write!(f, "lowest-asc"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "name-asc" => Ok(SortKey::NameAsc),
            "average-desc" | "avg-desc" | "average" | "avg" => Ok(SortKey::AverageDesc),
            "average-asc" | "avg-asc" => Ok(SortKey::AverageAsc),
            "highest-desc" | "highest" | "high" => Ok(SortKey::HighestDesc),
            "lowest-asc" | "lowest" | "low" => Ok(SortKey::LowestAsc),
            other => Err(format!(
                "unknown sort key: {other} (expected one of: name, average-desc, average-asc, highest-desc, lowest-asc)"
            )),
        }
    }
}
