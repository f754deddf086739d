//! Dataset conversions.
//!
//! Each conversion is a single forward pass: read source rows, transform, and
//! append lines to freshly truncated output files.

mod fiction;
mod library;
mod listing;

pub use self::fiction::{convert_fiction, write_fiction_dataset, FictionCounts, FictionReport};
pub use self::library::{convert_library, write_library_dataset, LibraryReport};
pub use self::listing::{convert_csv, write_csv_dataset, CsvReport};
