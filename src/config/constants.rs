//! Configuration constants.
//!
//! This module defines the fixed locations, schemas and operational parameters
//! of the dataset conversions. The CLI exposes most of them as overridable
//! defaults.

use std::time::Duration;

// Remote source
/// Book cover dataset listing (title/author/category metadata).
/// Row format: "[ASIN]","[FILENAME]","[IMAGE URL]","[TITLE]","[AUTHOR]","[CATEGORY ID]","[CATEGORY]"
pub const CSV_SOURCE_URL: &str =
    "https://github.com/uchidalab/book-dataset/raw/master/Task2/book32-listing.csv";
/// Timeout for the dataset download in seconds
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);
/// User-Agent sent with the dataset download
pub const DEFAULT_USER_AGENT: &str = concat!("book_labels/", env!("CARGO_PKG_VERSION"));

// Local files
/// Local copy of the listing
pub const CSV_PATH: &str = "data/dataset.csv";
/// Local SQLite database with the `book` and `fiction` tables
pub const DB_PATH: &str = "data/book_dataset.sqlite";
/// Label-pair JSON lines for the CSV and library conversions
pub const DATASET_PATH: &str = "data/dataset.txt";
/// Label-pairs JSON lines for the fiction conversion
pub const FICTION_JSON_PATH: &str = "data/dataset_json.txt";
/// Custom `key="value"` lines for the fiction conversion
pub const FICTION_CUSTOM_PATH: &str = "data/dataset_custom.txt";

// Record keys
// The CSV and library datasets use the singular key, the fiction dataset the
// plural one. Downstream readers may depend on either.
/// Record key of the CSV and library datasets
pub const LABEL_PAIR_KEY: &str = "label_pair";
/// Record key of the fiction dataset
pub const LABEL_PAIRS_KEY: &str = "label_pairs";

// CSV layout
/// Minimum number of fields a listing row must carry
pub const CSV_MIN_FIELDS: usize = 7;
/// Label keys and the listing column each one is read from
pub const CSV_COLUMNS: &[(&str, usize)] = &[
    ("title", 3),
    ("author", 4),
    ("category_id", 5),
    ("category", 6),
];

// Library (variant A) schema
/// Rows copied per transaction when seeding from a LibGen dump
pub const SEED_BATCH_SIZE: usize = 10_000;
/// Label keys zipped positionally with each `book` row
pub const LIBRARY_COLUMNS: &[&str] = &[
    "author_family_name",
    "author_first_name",
    "author_surname",
    "language",
    "year",
    "extension",
    "title",
    "publisher",
    "edition",
];

// Fiction (variant B) schema
/// LibGen fiction table
pub const FICTION_TABLE: &str = "fiction";
/// Field names of an exploded fiction record, in output order
pub const FICTION_COLUMNS: &[&str] = &[
    "author_family_name",
    "author_first_name",
    "language",
    "year",
    "extension",
    "title",
    "publisher",
    "edition",
];
/// Separates authors within the author column
pub const AUTHOR_SEPARATOR: char = ';';
/// Separates family and given name within one author
pub const NAME_SEPARATOR: char = ',';

/// Rows between progress log lines
pub const LOGGING_INTERVAL: usize = 10_000;
