//! Command-line options.
//!
//! Every option defaults to the fixed constant it overrides, so running a
//! subcommand without flags reproduces the standard dataset layout.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    CSV_PATH, CSV_SOURCE_URL, DATASET_PATH, DB_PATH, DEFAULT_USER_AGENT, DOWNLOAD_TIMEOUT,
    FICTION_CUSTOM_PATH, FICTION_JSON_PATH, FICTION_TABLE, LOGGING_INTERVAL, SEED_BATCH_SIZE,
};
use crate::config::types::{CsvConfig, FictionConfig, LibraryConfig, LogFormat, LogLevel};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Download the listing (once) and build data/dataset.txt
/// book_labels csv
///
/// # Seed the book table from a LibGen dump, then build data/dataset.txt
/// book_labels library --seed-db ~/Downloads/mysqlite3.db
///
/// # Explode the fiction table into per-author records
/// book_labels --log-level debug fiction
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "book_labels",
    version,
    about = "Converts bibliographic records into line-delimited label-pair datasets."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Conversion to run
    #[command(subcommand)]
    pub command: Command,
}

/// Conversion to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the book listing CSV if missing and convert it to label-pair JSON lines
    Csv(CsvArgs),
    /// Convert the `book` table (optionally seeded from a LibGen dump) to label-pair JSON lines
    Library(LibraryArgs),
    /// Explode the fiction table into one JSON and one custom line per author
    Fiction(FictionArgs),
}

/// Options of the `csv` subcommand.
#[derive(Debug, Args)]
pub struct CsvArgs {
    /// Listing URL
    #[arg(long, default_value = CSV_SOURCE_URL)]
    pub url: String,

    /// Local copy of the listing
    #[arg(long, value_parser, default_value = CSV_PATH)]
    pub csv_path: PathBuf,

    /// Output file
    #[arg(long, value_parser, default_value = DATASET_PATH)]
    pub output: PathBuf,

    /// Download timeout in seconds
    #[arg(long, default_value_t = DOWNLOAD_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<CsvArgs> for CsvConfig {
    fn from(args: CsvArgs) -> Self {
        Self {
            source_url: args.url,
            csv_path: args.csv_path,
            output: args.output,
            timeout: Duration::from_secs(args.timeout_seconds),
            user_agent: args.user_agent,
        }
    }
}

/// Options of the `library` subcommand.
#[derive(Debug, Args)]
pub struct LibraryArgs {
    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// LibGen dump to seed the book table from when the database is new
    #[arg(long, value_parser)]
    pub seed_db: Option<PathBuf>,

    /// Output file
    #[arg(long, value_parser, default_value = DATASET_PATH)]
    pub output: PathBuf,

    /// Rows per seed transaction
    #[arg(long, default_value_t = SEED_BATCH_SIZE)]
    pub batch_size: usize,
}

impl From<LibraryArgs> for LibraryConfig {
    fn from(args: LibraryArgs) -> Self {
        Self {
            db_path: args.db_path,
            seed_db: args.seed_db,
            output: args.output,
            batch_size: args.batch_size.max(1),
            log_interval: LOGGING_INTERVAL,
        }
    }
}

/// Options of the `fiction` subcommand.
#[derive(Debug, Args)]
pub struct FictionArgs {
    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Source table
    #[arg(long, default_value = FICTION_TABLE)]
    pub table: String,

    /// JSON lines output
    #[arg(long, value_parser, default_value = FICTION_JSON_PATH)]
    pub json_output: PathBuf,

    /// Custom key="value" lines output
    #[arg(long, value_parser, default_value = FICTION_CUSTOM_PATH)]
    pub custom_output: PathBuf,
}

impl From<FictionArgs> for FictionConfig {
    fn from(args: FictionArgs) -> Self {
        Self {
            db_path: args.db_path,
            table: args.table,
            json_output: args.json_output,
            custom_output: args.custom_output,
            log_interval: LOGGING_INTERVAL,
        }
    }
}
