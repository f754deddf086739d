//! Source-row transformations.
//!
//! Pure functions only: splitting multi-author fields, normalizing values for
//! the custom text format, and exploding fiction rows into per-author records.

mod authors;
mod explode;
mod normalize;

pub use authors::{split_authors, split_name};
pub use explode::{explode, ExplodedRecord, FictionRow};
pub use normalize::{normalize_field, unescape_field};
