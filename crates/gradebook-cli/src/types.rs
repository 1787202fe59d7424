use std::path::PathBuf;

use serde::Serialize;

use gradebook_model::{CourseStats, GradeStats};

/// Explicit configuration for one pipeline run.
///
/// Every parameter comes from the command line; nothing is read from the
/// environment or from module-level state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    /// Field delimiter of the input file.
    pub delimiter: u8,
}

/// Outcome of a courses run.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRunResult {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub stats: CourseStats,
}

/// Outcome of a grades run.
#[derive(Debug, Clone, Serialize)]
pub struct GradeRunResult {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub stats: GradeStats,
}
