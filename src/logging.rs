//! Tracing setup.
//!
//! stdout belongs to the TUI, so events go to a log file instead. Logging is
//! optional: if the file can't be created the app runs without it.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Default log location: `<cache dir>/navlist/navlist.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("navlist").join("navlist.log")
}

/// Installs the global subscriber writing to `path`.
///
/// Level comes from `RUST_LOG`, defaulting to `info`. Returns `false` when
/// the log file could not be opened or a subscriber was already installed.
pub fn init_tracing(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}
