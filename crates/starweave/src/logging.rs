//! Log file setup.
//!
//! The terminal is busy drawing the background, so events go to a file in the
//! platform data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use starweave_config::{Config, LoggingConfig};
use tracing::Level;

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "starweave.log";

/// Install the global subscriber. Returns the log file path, or `None` if
/// logging stays off because the file could not be opened.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    let parsed = config.level.parse::<Level>();
    let level = parsed.as_ref().copied().unwrap_or(Level::INFO);

    let dir = Config::project_dirs()?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    if parsed.is_err() {
        tracing::warn!(level = %config.level, "unknown log level, using info");
    }
    Some(path)
}
