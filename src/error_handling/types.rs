//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for fetching the remote CSV listing.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The request could not be sent or its body could not be read.
    #[error("Request to {url} failed")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Download of {url} failed with HTTP status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status
        status: reqwest::StatusCode,
    },

    /// The local copy could not be created or written.
    #[error("Failed to write {path}")]
    Io {
        /// Local file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Error types for converting source rows into dataset lines.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The CSV listing could not be parsed.
    #[error("CSV parse error")]
    Csv(#[from] csv::Error),

    /// A listing row has fewer fields than the label columns require.
    #[error("Row {line} has {found} fields, expected at least {expected}")]
    ShortRow {
        /// 1-based line of the row in the listing
        line: u64,
        /// Number of fields found
        found: usize,
        /// Number of fields required
        expected: usize,
    },

    /// A record could not be serialized.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// Writing an output line failed.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Reading source rows failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for ConvertError {
    fn from(e: sqlx::Error) -> Self {
        ConvertError::Database(DatabaseError::SqlError(e))
    }
}
