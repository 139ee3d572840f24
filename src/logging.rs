//! File logging
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! platform cache directory and only when a filter is requested through
//! `CAREPLAN_LOG` or `RUST_LOG`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

pub const LOG_ENV: &str = "CAREPLAN_LOG";
const LOG_FILE: &str = "careplan.log";

/// Resolve the log filter, preferring `CAREPLAN_LOG` over `RUST_LOG`
pub fn log_filter(careplan_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    careplan_log
        .or(rust_log)
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
}

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("careplan").join(LOG_FILE))
}

/// Initialise env_logger writing to the log file
///
/// Returns the log file path when logging was enabled.
pub fn init_logging() -> Option<PathBuf> {
    let filter = log_filter(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    )?;
    let path = log_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    log::info!("careplan {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Some(path)
}
