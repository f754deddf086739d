// Shared test helpers for database setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::SqlitePool;
use std::path::Path;

/// Creates a database file at `db_path` and returns a single-connection pool on it.
pub async fn create_test_pool_with_path(db_path: &Path) -> SqlitePool {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let options = sqlx::sqlite::SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database")
}

/// Creates a LibGen-style dump with a `main` table holding `count` rows.
#[allow(dead_code)] // Used by other test files
pub async fn create_libgen_dump(db_path: &Path, count: usize) {
    let pool = create_test_pool_with_path(db_path).await;
    sqlx::query(
        "CREATE TABLE main (ID integer primary key, Title text, AuthorFamily1 text,
            AuthorName1 text, AuthorSurname1 text, Language text, Year text,
            Extension text, Publisher text, Edition text)",
    )
    .execute(&pool)
    .await
    .expect("Failed to create main table");

    for i in 0..count {
        sqlx::query(
            "INSERT INTO main (Title, AuthorFamily1, AuthorName1, AuthorSurname1, Language,
                Year, Extension, Publisher, Edition)
             VALUES (?, ?, ?, NULL, 'English', ?, 'pdf', 'Springer', '2nd')",
        )
        .bind(format!("Book {i}"))
        .bind(format!("Family{i}"))
        .bind(format!("Given{i}"))
        .bind((2000 + i).to_string())
        .execute(&pool)
        .await
        .expect("Failed to insert dump row");
    }
    pool.close().await;
}

/// Creates a `fiction` table with one row per author field.
#[allow(dead_code)] // Used by other test files
pub async fn create_fiction_db(db_path: &Path, authors: &[&str]) {
    let pool = create_test_pool_with_path(db_path).await;
    sqlx::query(
        "CREATE TABLE fiction (ID integer primary key, MD5 text, Title text, Author text,
            Series text, Edition text, Language text, Year text, Publisher text,
            Extension text)",
    )
    .execute(&pool)
    .await
    .expect("Failed to create fiction table");

    for author in authors {
        sqlx::query(
            "INSERT INTO fiction (MD5, Title, Author, Edition, Language, Year, Publisher, Extension)
             VALUES ('d41d8cd9', 'Title \"X\"', ?, '1st', 'eng', '2001', 'Pub Y', 'epub')",
        )
        .bind(*author)
        .execute(&pool)
        .await
        .expect("Failed to insert fiction row");
    }
    pool.close().await;
}
