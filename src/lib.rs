//! book_labels library: bibliographic records to label-pair datasets
//!
//! This library converts book metadata into line-delimited datasets of
//! `{key, val}` label pairs:
//!
//! - [`convert_csv`]: the book cover listing CSV (downloaded once) to
//!   `label_pair` JSON lines
//! - [`convert_library`]: the SQLite `book` table, optionally seeded from a
//!   LibGen dump, to `label_pair` JSON lines
//! - [`convert_fiction`]: the SQLite `fiction` table, exploded per author, to
//!   `label_pairs` JSON lines plus custom `{key="value",...}` lines
//!
//! # Example
//!
//! ```no_run
//! use book_labels::{convert_fiction, FictionConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = convert_fiction(FictionConfig::default()).await?;
//! println!(
//!     "Wrote {} records from {} rows",
//!     report.counts.total, report.counts.orginal
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The conversions are async (sqlx, reqwest) and need a Tokio runtime. They
//! never spawn tasks, so a current-thread runtime is enough.

#![warn(missing_docs)]

mod acquire;
mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
mod pipeline;
mod storage;
pub mod transform;

// Re-export public API
pub use acquire::download_if_missing;
pub use config::{CsvConfig, FictionConfig, LibraryConfig, LogFormat, LogLevel};
pub use models::{LabelPair, LabelRecord};
pub use pipeline::{
    convert_csv, convert_fiction, convert_library, write_csv_dataset, write_fiction_dataset,
    write_library_dataset, CsvReport, FictionCounts, FictionReport, LibraryReport,
};
pub use storage::{create_book_table, seed_books};
