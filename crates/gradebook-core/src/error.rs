//! Registry error types.
//!
//! Every mutating registry operation returns one of these on failure. A
//! failed operation never leaves a partial change behind, so callers can
//! report the error and carry on with the registry as it was.

use thiserror::Error;

use crate::model::StudentId;

/// Errors returned by [`Registry`](crate::registry::Registry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The student name was empty or whitespace only.
    #[error("student name must not be empty")]
    EmptyName,

    /// A non-empty token in the grade text was not an integer.
    #[error("invalid grade '{token}': use comma separated integers")]
    InvalidGrade { token: String },

    /// No student with this id is currently in the registry.
    #[error("no student with id {0}")]
    NotFound(StudentId),
}

impl RegistryError {
    /// Returns `true` if the error came from user input rather than a stale id.
    ///
    /// Input errors call for re-prompting; a stale id calls for refreshing
    /// the caller's view before retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RegistryError::EmptyName | RegistryError::InvalidGrade { .. }
        )
    }
}

/// A roster entry that could not be imported.
///
/// Imports are all-or-nothing, so this also means nothing from the roster
/// was added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("roster entry {} ({name:?}): {source}", .index + 1)]
pub struct RosterError {
    /// Zero-based position of the entry in the roster.
    pub index: usize,
    /// The entry's name as written in the roster.
    pub name: String,
    #[source]
    pub source: RegistryError,
}
