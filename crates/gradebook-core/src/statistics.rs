//! Derived grade statistics and display snapshots.
//!
//! Nothing here is cached: every call rescans the grades, so the numbers
//! always reflect the record as it is now.

use serde::{Deserialize, Serialize};

use crate::model::{GradeSet, StudentId, StudentRecord};

impl GradeSet {
    /// Arithmetic mean of the grades, or 0.0 for an empty set.
    pub fn average(&self) -> f64 {
        let grades = self.as_slice();
        if grades.is_empty() {
            return 0.0;
        }
        let sum: u64 = grades.iter().map(|&g| g as u64).sum();
        sum as f64 / grades.len() as f64
    }

    /// The average rounded to hundredths, halves away from zero.
    ///
    /// Rounds the exact `sum / count` in integers. Scaling the `f64` average
    /// by 100 can land just under a half (0.575 becomes 57.49999...) and
    /// round the wrong way.
    pub fn rounded_average(&self) -> f64 {
        let grades = self.as_slice();
        if grades.is_empty() {
            return 0.0;
        }
        let sum: u128 = grades.iter().map(|&g| g as u128).sum();
        let count = grades.len() as u128;
        let hundredths = (sum * 200 + count) / (count * 2);
        hundredths as f64 / 100.0
    }

    /// Highest grade, or 0 for an empty set.
    pub fn highest(&self) -> u32 {
        self.as_slice().iter().copied().max().unwrap_or(0)
    }

    /// Lowest grade, or 0 for an empty set.
    pub fn lowest(&self) -> u32 {
        self.as_slice().iter().copied().min().unwrap_or(0)
    }
}

/// One row of the tabular student view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub id: StudentId,
    pub name: String,
    pub grades: Vec<u32>,
    /// Average rounded to two decimals.
    pub average: f64,
    pub highest: u32,
    pub lowest: u32,
}

impl From<&StudentRecord> for RecordSnapshot {
    fn from(record: &StudentRecord) -> Self {
        let grades = record.grades();
        Self {
            id: record.id(),
            name: record.name().to_string(),
            grades: grades.as_slice().to_vec(),
            average: grades.rounded_average(),
            highest: grades.highest(),
            lowest: grades.lowest(),
        }
    }
}

/// Snapshot a sequence of records, keeping their order.
pub fn snapshot<'a, I>(records: I) -> Vec<RecordSnapshot>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    records.into_iter().map(RecordSnapshot::from).collect()
}
