//! Configuration types.
//!
//! This module defines the logging enums shared with the CLI and the plain
//! configuration structs consumed by each conversion.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    CSV_PATH, CSV_SOURCE_URL, DATASET_PATH, DB_PATH, DEFAULT_USER_AGENT, DOWNLOAD_TIMEOUT,
    FICTION_CUSTOM_PATH, FICTION_JSON_PATH, FICTION_TABLE, LOGGING_INTERVAL, SEED_BATCH_SIZE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for the CSV listing conversion.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Remote listing downloaded when `csv_path` does not exist yet
    pub source_url: String,
    /// Local copy of the listing
    pub csv_path: PathBuf,
    /// Label-pair JSON lines output
    pub output: PathBuf,
    /// Download timeout
    pub timeout: Duration,
    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            source_url: CSV_SOURCE_URL.to_string(),
            csv_path: PathBuf::from(CSV_PATH),
            output: PathBuf::from(DATASET_PATH),
            timeout: DOWNLOAD_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Configuration for the `book` table conversion.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Local SQLite database holding the `book` table
    pub db_path: PathBuf,
    /// LibGen dump copied into `db_path` when the latter does not exist yet
    pub seed_db: Option<PathBuf>,
    /// Label-pair JSON lines output
    pub output: PathBuf,
    /// Rows per committed seed transaction
    pub batch_size: usize,
    /// Rows between progress log lines
    pub log_interval: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            seed_db: None,
            output: PathBuf::from(DATASET_PATH),
            batch_size: SEED_BATCH_SIZE,
            log_interval: LOGGING_INTERVAL,
        }
    }
}

/// Configuration for the `fiction` table conversion.
#[derive(Debug, Clone)]
pub struct FictionConfig {
    /// Local SQLite database holding the fiction table
    pub db_path: PathBuf,
    /// Source table name
    pub table: String,
    /// Label-pairs JSON lines output
    pub json_output: PathBuf,
    /// Custom `key="value"` lines output
    pub custom_output: PathBuf,
    /// Source rows between progress log lines
    pub log_interval: usize,
}

impl Default for FictionConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            table: FICTION_TABLE.to_string(),
            json_output: PathBuf::from(FICTION_JSON_PATH),
            custom_output: PathBuf::from(FICTION_CUSTOM_PATH),
            log_interval: LOGGING_INTERVAL,
        }
    }
}
