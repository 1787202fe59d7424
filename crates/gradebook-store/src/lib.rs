//! SQLite persistence.
//!
//! The store owns the connection for one run and rebuilds table contents
//! wholesale: every write is a DELETE-then-INSERT inside a single
//! transaction, so a failed write leaves the previous contents visible.
//! Schema creation is idempotent and runs at the start of every pipeline
//! invocation.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{Store, StoredCourseStats};
