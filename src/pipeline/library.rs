//! `book` table conversion.
//!
//! Optionally seeds the local `book` table from a LibGen dump, then writes one
//! `label_pair` JSON line per row with the 9 library columns.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use futures::TryStreamExt;
use log::{info, warn};
use sqlx::SqlitePool;

use crate::app::{is_progress_tick, log_progress};
use crate::config::{LibraryConfig, LABEL_PAIR_KEY, LIBRARY_COLUMNS};
use crate::error_handling::ConvertError;
use crate::export::{create_output, write_json_line};
use crate::models::LabelRecord;
use crate::storage::rows::text_columns;
use crate::storage::{
    open_local_db, open_source_db, remove_local_db, seed_books, SELECT_BOOKS,
};

/// Results of a library conversion.
#[derive(Debug, Clone)]
pub struct LibraryReport {
    /// Rows copied from the seed dump (`None` when seeding was skipped)
    pub seeded: Option<usize>,
    /// Number of JSON lines written
    pub records: usize,
    /// Path of the written dataset
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Seeds the database when it is new and a dump is configured, then
/// regenerates the dataset from the `book` table.
///
/// # Errors
///
/// Fails if the database cannot be opened, the seed dump or the `book` table
/// is missing, or the dataset cannot be written.
pub async fn convert_library(config: LibraryConfig) -> Result<LibraryReport> {
    let start_time = Instant::now();

    let (pool, created) = open_local_db(&config.db_path)
        .await
        .context("Failed to open local database")?;

    let seeded = match (&config.seed_db, created) {
        (Some(seed_path), true) => {
            info!("Seeding book table from {}", seed_path.display());
            match seed_from(seed_path, &pool, config.batch_size).await {
                Ok(copied) => Some(copied),
                Err(e) => {
                    // An existing database file is never seeded, so drop it
                    pool.close().await;
                    if let Err(remove_err) = remove_local_db(&config.db_path) {
                        warn!(
                            "Failed to remove unseeded database {}: {remove_err}",
                            config.db_path.display()
                        );
                    }
                    return Err(e);
                }
            }
        }
        (Some(_), false) => {
            info!("Database already exists, skipping seed");
            None
        }
        (None, true) => {
            pool.close().await;
            remove_local_db(&config.db_path).with_context(|| {
                format!("Failed to remove empty database {}", config.db_path.display())
            })?;
            bail!(
                "Database {} does not exist and no seed database was given",
                config.db_path.display()
            );
        }
        (None, false) => None,
    };

    info!("Generating the dataset file from sqlite");
    let mut writer = create_output(&config.output)?;
    let records = write_library_dataset(&pool, &mut writer, config.log_interval)
        .await
        .context("Failed to convert book table")?;
    writer.flush().context("Failed to flush dataset file")?;
    pool.close().await;

    info!("Finished::: Generated {records} lines");
    Ok(LibraryReport {
        seeded,
        records,
        output: config.output,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

async fn seed_from(seed_path: &Path, dest: &SqlitePool, batch_size: usize) -> Result<usize> {
    let source = open_source_db(seed_path)
        .await
        .with_context(|| format!("Failed to open seed database: {}", seed_path.display()))?;
    let copied = seed_books(&source, dest, batch_size).await;
    source.close().await;
    copied.context("Failed to seed book table")
}

/// Writes one JSON line per `book` row, zipping [`LIBRARY_COLUMNS`] with the
/// row values. NULL cells become JSON `null`.
///
/// # Returns
///
/// The number of lines written.
pub async fn write_library_dataset<W: Write>(
    pool: &SqlitePool,
    writer: &mut W,
    log_interval: usize,
) -> Result<usize, ConvertError> {
    let start_time = Instant::now();
    let mut rows = sqlx::query(SELECT_BOOKS).fetch(pool);
    let mut total = 0usize;

    while let Some(row) = rows.try_next().await? {
        let values = text_columns(&row, LIBRARY_COLUMNS.len())?;
        let record = LabelRecord::zipped(
            LABEL_PAIR_KEY,
            LIBRARY_COLUMNS,
            values.iter().map(Option::as_deref),
        );
        write_json_line(writer, &record)?;

        total += 1;
        if is_progress_tick(total, log_interval) {
            log_progress(start_time, total);
        }
    }
    Ok(total)
}
