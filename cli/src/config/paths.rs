//! Platform-specific path utilities for autocommit.

use std::path::PathBuf;

use crate::error::{AutocommitError, Result};

/// Get the configuration directory for autocommit.
///
/// - Linux: `~/.config/autocommit`
/// - macOS: `~/Library/Application Support/autocommit`
/// - Windows: `%APPDATA%\autocommit`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| AutocommitError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("autocommit"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

