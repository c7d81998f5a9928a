//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to `~/.tweetgen/logs/tweetgen.log`.
//! Logging is optional: if the file cannot be opened nothing is installed.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::ClientConfig;

/// Default log file location, if a home directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".tweetgen").join("logs").join("tweetgen.log"))
}

/// Install the global subscriber. Returns whether logging is active.
pub fn init_logging(config: &ClientConfig) -> bool {
    match log_file_path() {
        Some(path) => init_logging_at(&path, &config.log_filter),
        None => false,
    }
}

/// Install the global subscriber writing to `path`.
///
/// Only the first successful call in a process takes effect.
pub fn init_logging_at(path: &Path, filter: &str) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
