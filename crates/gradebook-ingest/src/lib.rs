//! CSV ingestion.
//!
//! Reads a delimited export into validated, fully materialized records.
//! Validation is strict and all-or-nothing: a missing file, a header without
//! the required columns, or a single unconvertible numeric cell fails the
//! whole load before anything reaches the store.

mod error;
mod loader;

pub use error::{IngestError, Result};
pub use loader::{COURSE_COLUMNS, GRADE_COLUMNS, IngestOptions, read_courses, read_grades};
