//! Dataset output formats.
//!
//! This module writes label records to line-delimited files:
//! - JSONL with spaced separators and ASCII-only escapes
//! - Custom `{key="value",...}` lines

mod custom;
mod format;
mod jsonl;
mod output;

pub use custom::write_custom_line;
pub use format::SpacedAsciiFormatter;
pub use jsonl::write_json_line;
pub use output::create_output;
