//! The student registry: sole owner of every [`StudentRecord`].
//!
//! All creation, mutation and removal of records goes through here. Each
//! operation validates first and only then touches storage, so a failed call
//! leaves the registry exactly as it was.

use crate::error::{RegistryError, RosterError};
use crate::model::{GradeSet, StudentId, StudentRecord};
use crate::parser::{parse_grades, Roster};

/// An ordered, in-memory collection of student records.
///
/// Records keep insertion order. Deleting shifts later records down by one
/// position, but ids never change.
///
/// Not synchronized: a multi-threaded host must serialize access itself,
/// e.g. behind a single `Mutex<Registry>`.
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<StudentRecord>,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a student at the end of the registry.
    ///
    /// Fails with [`RegistryError::EmptyName`] if the trimmed name is empty,
    /// or [`RegistryError::InvalidGrade`] if the grade text does not parse.
    pub fn add(&mut self, name: &str, grades_text: &str) -> Result<StudentId, RegistryError> {
        let (name, grades) = validate(name, grades_text)?;

        let id = StudentId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, name = %name, grades = grades.len(), "student added");
        self.records.push(StudentRecord { id, name, grades });
        Ok(id)
    }

    /// Replace the name and grades of an existing student in place.
    ///
    /// The id is checked before the input, so a stale id reports
    /// [`RegistryError::NotFound`] even when the input is also bad.
    pub fn update(
        &mut self,
        id: StudentId,
        name: &str,
        grades_text: &str,
    ) -> Result<(), RegistryError> {
        let pos = self.position(id).ok_or(RegistryError::NotFound(id))?;
        let (name, grades) = validate(name, grades_text)?;

        tracing::debug!(%id, name = %name, grades = grades.len(), "student updated");
        let record = &mut self.records[pos];
        record.name = name;
        record.grades = grades;
        Ok(())
    }

    /// Remove a student, returning the removed record.
    pub fn delete(&mut self, id: StudentId) -> Result<StudentRecord, RegistryError> {
        let pos = self.position(id).ok_or(RegistryError::NotFound(id))?;
        let record = self.records.remove(pos);
        tracing::debug!(%id, name = %record.name, "student deleted");
        Ok(record)
    }

    /// Every record, in registry order.
    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Current position of a student, for callers that still address rows.
    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// The record at a position, if in bounds.
    pub fn get_at(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add every student in a roster, or none of them.
    ///
    /// All entries are validated before the first one is stored. On failure
    /// the error names the first bad entry and the registry is unchanged.
    pub fn import(&mut self, roster: &Roster) -> Result<Vec<StudentId>, RosterError> {
        let validated = roster
            .students
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                validate(&entry.name, &entry.grades).map_err(|source| RosterError {
                    index,
                    name: entry.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ids = validated
            .into_iter()
            .map(|(name, grades)| {
                let id = StudentId(self.next_id);
                self.next_id += 1;
                self.records.push(StudentRecord { id, name, grades });
                id
            })
            .collect::<Vec<_>>();

        tracing::debug!(roster = %roster.name, count = ids.len(), "roster imported");
        Ok(ids)
    }
}

/// Check a name and grade text, returning the trimmed name and parsed grades.
fn validate(name: &str, grades_text: &str) -> Result<(String, GradeSet), RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    let grades = parse_grades(grades_text)?;
    Ok((name.to_string(), grades))
}
