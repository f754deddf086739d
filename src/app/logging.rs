//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Returns true when `count` lands on a logging boundary.
pub fn is_progress_tick(count: usize, interval: usize) -> bool {
    interval > 0 && count > 0 && count % interval == 0
}

/// Logs progress information about a conversion.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `lines` - Lines written so far
pub fn log_progress(start_time: Instant, lines: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        lines as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Current: {} lines ({:.2} seconds, ~{:.0} lines/sec)",
        lines, elapsed_secs, rate
    );
}
