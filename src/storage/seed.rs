//! Seeding the local `book` table from a LibGen dump.

use futures::TryStreamExt;
use log::info;
use sqlx::SqlitePool;

use super::rows::text_columns;
use crate::error_handling::DatabaseError;

const CREATE_BOOK_TABLE: &str = "CREATE TABLE IF NOT EXISTS book (
    AuthorFamilyName text, AuthorName text, AuthorSurname text, Language text,
    Year text, Extension text, Title text, Publisher text, Edition text
)";

const INSERT_BOOK: &str = "INSERT INTO book VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

// Values are cast so that numeric cells in the dump decode as text
const SELECT_DUMP: &str = "SELECT CAST(AuthorFamily1 AS TEXT), CAST(AuthorName1 AS TEXT),
    CAST(AuthorSurname1 AS TEXT), CAST(Language AS TEXT), CAST(Year AS TEXT),
    CAST(Extension AS TEXT), CAST(Title AS TEXT), CAST(Publisher AS TEXT),
    CAST(Edition AS TEXT)
    FROM main";

const BOOK_COLUMN_COUNT: usize = 9;

type BookValues = Vec<Option<String>>;

/// Creates the 9-column `book` table if it does not exist.
pub async fn create_book_table(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_BOOK_TABLE).execute(pool).await?;
    Ok(())
}

/// Copies every row of the dump's `main` table into `book`.
///
/// Rows are inserted in batches of `batch_size`, each batch in its own
/// committed transaction. The cumulative count is logged after every batch.
///
/// # Returns
///
/// The number of rows copied.
pub async fn seed_books(
    source: &SqlitePool,
    dest: &SqlitePool,
    batch_size: usize,
) -> Result<usize, DatabaseError> {
    create_book_table(dest).await?;

    let batch_size = batch_size.max(1);
    let mut rows = sqlx::query(SELECT_DUMP).fetch(source);
    let mut batch: Vec<BookValues> = Vec::with_capacity(batch_size);
    let mut total = 0usize;

    while let Some(row) = rows.try_next().await? {
        batch.push(text_columns(&row, BOOK_COLUMN_COUNT)?);
        if batch.len() == batch_size {
            total += insert_batch(dest, &batch).await?;
            batch.clear();
            info!("Current: {total} lines");
        }
    }
    if !batch.is_empty() {
        total += insert_batch(dest, &batch).await?;
        info!("Current: {total} lines");
    }

    info!("Finished::: Ingested {total} lines");
    Ok(total)
}

async fn insert_batch(dest: &SqlitePool, batch: &[BookValues]) -> Result<usize, DatabaseError> {
    let mut tx = dest.begin().await?;
    for values in batch {
        let mut query = sqlx::query(INSERT_BOOK);
        for value in values {
            query = query.bind(value.as_deref());
        }
        query.execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(batch.len())
}
