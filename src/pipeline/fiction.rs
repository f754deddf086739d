//! Fiction table conversion.
//!
//! Every source row is exploded into one record per author. Each record is
//! written twice: as a custom `{key="value",...}` line and as a
//! `label_pairs` JSON line.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::TryStreamExt;
use log::info;
use sqlx::SqlitePool;

use crate::app::is_progress_tick;
use crate::config::FictionConfig;
use crate::error_handling::ConvertError;
use crate::export::{create_output, write_custom_line, write_json_line};
use crate::storage::rows::text_columns;
use crate::storage::{open_existing_db, select_fiction};
use crate::transform::{explode, FictionRow};

const FICTION_SELECT_COLUMNS: usize = 8;

/// Counters of a fiction conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FictionCounts {
    /// Exploded records written to each output
    pub total: usize,
    /// Source rows consumed
    pub orginal: usize,
}

/// Results of a fiction conversion.
#[derive(Debug, Clone)]
pub struct FictionReport {
    /// Record and row counters
    pub counts: FictionCounts,
    /// Path of the JSON lines output
    pub json_output: PathBuf,
    /// Path of the custom lines output
    pub custom_output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Regenerates both fiction datasets from the configured table.
///
/// # Errors
///
/// Fails if the database or table is missing or an output cannot be written.
/// Outputs written before a failure are left truncated.
pub async fn convert_fiction(config: FictionConfig) -> Result<FictionReport> {
    let start_time = Instant::now();

    let pool = open_existing_db(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database: {}", config.db_path.display()))?;

    info!("Generating the dataset files from table {}", config.table);
    let mut json_writer = create_output(&config.json_output)?;
    let mut custom_writer = create_output(&config.custom_output)?;
    let counts = write_fiction_dataset(
        &pool,
        &config.table,
        &mut json_writer,
        &mut custom_writer,
        config.log_interval,
    )
    .await
    .with_context(|| format!("Failed to convert table {}", config.table))?;
    json_writer.flush().context("Failed to flush JSON dataset")?;
    custom_writer.flush().context("Failed to flush custom dataset")?;
    pool.close().await;

    info!(
        "Finished::: Generated {} lines from {} rows",
        counts.total, counts.orginal
    );
    Ok(FictionReport {
        counts,
        json_output: config.json_output,
        custom_output: config.custom_output,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Explodes every row of `table` and writes each record to both outputs.
pub async fn write_fiction_dataset<J: Write, C: Write>(
    pool: &SqlitePool,
    table: &str,
    json_writer: &mut J,
    custom_writer: &mut C,
    log_interval: usize,
) -> Result<FictionCounts, ConvertError> {
    let query = select_fiction(table);
    let mut rows = sqlx::query(&query).fetch(pool);
    let mut counts = FictionCounts::default();

    while let Some(row) = rows.try_next().await? {
        let row = FictionRow::from_columns(text_columns(&row, FICTION_SELECT_COLUMNS)?);
        for record in explode(&row) {
            write_custom_line(custom_writer, record.fields())?;
            write_json_line(json_writer, &record.label_record())?;
            counts.total += 1;
        }

        counts.orginal += 1;
        if is_progress_tick(counts.orginal, log_interval) {
            info!("Current: total={} orginal={}", counts.total, counts.orginal);
        }
    }
    Ok(counts)
}
