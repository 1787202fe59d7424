use thiserror::Error;

/// Errors raised by database operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
