//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed paths, URLs and schemas (as constants)
//! - Per-conversion configuration structs
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, CsvArgs, FictionArgs, LibraryArgs};
pub use constants::*;
pub use types::{CsvConfig, FictionConfig, LibraryConfig, LogFormat, LogLevel};
