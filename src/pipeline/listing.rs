//! CSV listing conversion.
//!
//! Reads the book listing (ISO-8859-1, comma separated, `"` quoted, no header)
//! and writes one `label_pair` JSON line per row.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder};
use log::info;

use crate::acquire::download_if_missing;
use crate::config::{CsvConfig, CSV_COLUMNS, CSV_MIN_FIELDS, LABEL_PAIR_KEY};
use crate::error_handling::ConvertError;
use crate::export::{create_output, write_json_line};
use crate::initialization::init_client;
use crate::models::{LabelPair, LabelRecord};

/// Results of a CSV conversion.
#[derive(Debug, Clone)]
pub struct CsvReport {
    /// Whether the listing was downloaded during this run
    pub downloaded: bool,
    /// Number of JSON lines written
    pub records: usize,
    /// Path of the written dataset
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Downloads the listing if it is missing, then regenerates the dataset.
///
/// The dataset is always rewritten from scratch, also when the download is
/// skipped.
///
/// # Errors
///
/// Fails on a non-2xx download status, a malformed or short CSV row, or any
/// IO error.
pub async fn convert_csv(config: CsvConfig) -> Result<CsvReport> {
    let start_time = Instant::now();

    let client = init_client(&config.user_agent, config.timeout)
        .context("Failed to initialize HTTP client")?;
    let downloaded = download_if_missing(&client, &config.source_url, &config.csv_path)
        .await
        .context("Failed to acquire CSV listing")?;

    info!("Generating the dataset file");
    let input = std::fs::File::open(&config.csv_path).with_context(|| {
        format!("Failed to open CSV listing: {}", config.csv_path.display())
    })?;
    let mut writer = create_output(&config.output)?;
    let records = write_csv_dataset(input, &mut writer)
        .with_context(|| format!("Failed to convert {}", config.csv_path.display()))?;
    writer.flush().context("Failed to flush dataset file")?;

    info!("Finished::: Generated {records} lines");
    Ok(CsvReport {
        downloaded,
        records,
        output: config.output,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Converts every listing row read from `input` into one JSON line.
///
/// # Returns
///
/// The number of lines written.
pub fn write_csv_dataset<R: Read, W: Write>(input: R, writer: &mut W) -> Result<usize, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .from_reader(input);

    let mut record = ByteRecord::new();
    let mut count = 0usize;
    while reader.read_byte_record(&mut record)? {
        let fields = decode_row(&record)?;
        let pairs = CSV_COLUMNS
            .iter()
            .map(|&(key, index)| LabelPair::new(key, &fields[index]))
            .collect();
        write_json_line(writer, &LabelRecord::new(LABEL_PAIR_KEY, pairs))?;
        count += 1;
    }
    Ok(count)
}

fn decode_row(record: &ByteRecord) -> Result<Vec<String>, ConvertError> {
    if record.len() < CSV_MIN_FIELDS {
        return Err(ConvertError::ShortRow {
            line: record.position().map_or(0, |p| p.line()),
            found: record.len(),
            expected: CSV_MIN_FIELDS,
        });
    }
    Ok(record.iter().map(decode_latin1).collect())
}

/// ISO-8859-1 maps each byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
