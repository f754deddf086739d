//! Database connection management.
//!
//! Conversions run one statement at a time, so every pool holds a single
//! connection.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Opens (creating if needed) the local dataset database.
///
/// Returns the pool and whether the database file was created by this call,
/// which decides whether the `book` table gets seeded.
pub async fn open_local_db(db_path: &Path) -> Result<(SqlitePool, bool), DatabaseError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create database directory: {e}");
            DatabaseError::FileCreationError(e.to_string())
        })?;
    }

    let created = match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(db_path)
    {
        Ok(_) => {
            info!("Database file created: {}", db_path.display());
            true
        }
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Database file already exists: {}", db_path.display());
            false
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    };

    let options = SqliteConnectOptions::new().filename(db_path);
    let pool = connect(options).await?;
    Ok((pool, created))
}

/// Opens an existing local database for reading and writing.
///
/// Unlike [`open_local_db`], a missing file is an error and nothing is
/// created on disk.
pub async fn open_existing_db(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false);
    connect(options).await
}

/// Removes a database file created by [`open_local_db`] along with its
/// journal files. The pool must be closed first.
pub fn remove_local_db(db_path: &Path) -> std::io::Result<()> {
    for suffix in ["-wal", "-shm", "-journal"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        match std::fs::remove_file(&sidecar) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e),
            _ => {}
        }
    }
    std::fs::remove_file(db_path)
}

/// Opens an existing database read-only (the LibGen dump).
pub async fn open_source_db(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);
    connect(options).await
}

async fn connect(options: SqliteConnectOptions) -> Result<SqlitePool, DatabaseError> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })
}
