//! Logging setup.
//!
//! The player owns the terminal, so logs go to a file in the cache
//! directory instead of stderr. The filter comes from `LMPMAP_LOG` (same
//! syntax as `RUST_LOG`) and defaults to `warn`, or `debug` with `--verbose`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LMPMAP_LOG";

/// Path of the log file.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("lmpmap").join("lmpmap.log"))
}

/// Default filter directive for a verbosity flag.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "lmpmap=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Returns the log file path.
pub fn init(verbose: bool) -> Result<PathBuf> {
    let path = log_path().context("Could not determine the cache directory")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(path)
}
