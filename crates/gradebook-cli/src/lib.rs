//! Library side of the gradebook CLI: logging setup, the sequential
//! pipeline, and report rendering. The binary in `main.rs` only parses
//! arguments and dispatches here.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
