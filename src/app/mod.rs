//! Application-level helpers shared by the conversions.

pub mod logging;

pub use logging::{is_progress_tick, log_progress};
