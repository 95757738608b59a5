//! File logging behind the `log` facade.
//!
//! The terminal belongs to the TUI, so log records only ever go to a file.
//! With logging disabled no logger is installed and the `log` macros are no-ops.

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default log file location
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Build the dispatch writing timestamped records to `path`.
pub fn build_dispatch(level: log::LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // sqlx and sea-orm are chatty at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("sea_orm", log::LevelFilter::Warn)
        .chain(file))
}

/// Install the global logger. Returns the log file path when logging is enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };

    build_dispatch(level, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(Some(path))
}
