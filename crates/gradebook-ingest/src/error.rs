use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a delimited input file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The input file does not exist.
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The header row is missing one or more required columns.
    #[error("{}: header is missing required column(s): {}", .path.display(), .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    /// A numeric field could not be parsed.
    #[error(
        "{}: row {row}, column '{column}': cannot parse {value:?} as a number",
        .path.display()
    )]
    Conversion {
        path: PathBuf,
        /// 1-based data row number, not counting the header.
        row: usize,
        column: String,
        value: String,
    },

    /// The underlying CSV reader failed (unreadable or malformed file).
    #[error("failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
