// storage/mod.rs
// SQLite access for the library and fiction conversions

pub mod pool;
pub mod rows;
pub mod seed;

// Re-export commonly used items
pub use pool::{open_existing_db, open_local_db, open_source_db, remove_local_db};
pub use rows::{select_fiction, SELECT_BOOKS};
pub use seed::{create_book_table, seed_books};
