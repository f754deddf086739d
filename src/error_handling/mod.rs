//! Error handling.
//!
//! Typed errors are grouped by concern:
//! - **Initialization**: logger and HTTP client setup
//! - **Database**: SQLite file creation and queries
//! - **Acquire**: downloading the CSV listing
//! - **Convert**: parsing source rows and writing dataset lines
//!
//! Orchestration code wraps these in `anyhow` with context.

mod types;

// Re-export public API
pub use types::{AcquireError, ConvertError, DatabaseError, InitializationError};
