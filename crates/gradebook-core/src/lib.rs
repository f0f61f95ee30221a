//! gradebook-core: Student registry, grade statistics, views, and reports.
//!
//! This crate owns the in-memory student store and everything derived from
//! it. It does no rendering: reports come out as a [`report::ReportModel`]
//! for an export adapter to turn into a document.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod report;
pub mod statistics;
pub mod traits;
pub mod view;

pub use error::{RegistryError, RosterError};
pub use model::{GradeSet, SortKey, StudentId, StudentRecord};
pub use registry::Registry;
pub use report::ReportModel;
pub use view::View;
