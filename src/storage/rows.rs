//! Source row decoding and queries.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Reads the first `count` columns of a row as nullable text.
pub(crate) fn text_columns(row: &SqliteRow, count: usize) -> Result<Vec<Option<String>>, sqlx::Error> {
    (0..count).map(|i| row.try_get::<Option<String>, _>(i)).collect()
}

/// All rows of the local `book` table, in storage order.
pub const SELECT_BOOKS: &str = "SELECT CAST(AuthorFamilyName AS TEXT), CAST(AuthorName AS TEXT),
    CAST(AuthorSurname AS TEXT), CAST(Language AS TEXT), CAST(Year AS TEXT),
    CAST(Extension AS TEXT), CAST(Title AS TEXT), CAST(Publisher AS TEXT),
    CAST(Edition AS TEXT)
    FROM book";

/// Builds the fiction query for `table`.
///
/// `Author` is selected twice: the first copy feeds family names, the second
/// given names.
pub fn select_fiction(table: &str) -> String {
    format!(
        "SELECT CAST(Author AS TEXT), CAST(Author AS TEXT), CAST(Language AS TEXT),
            CAST(Year AS TEXT), CAST(Extension AS TEXT), CAST(Title AS TEXT),
            CAST(Publisher AS TEXT), CAST(Edition AS TEXT)
         FROM {}",
        quote_identifier(table)
    )
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
