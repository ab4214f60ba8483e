//! Configuration management for autocommit.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::BotConfig;

use std::path::Path;

use crate::error::{AutocommitError, Result};

/// Load configuration from the default config file.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config() -> Result<BotConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<BotConfig> {
    if !path.exists() {
        return Ok(BotConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: BotConfig =
        toml::from_str(&contents).map_err(|e| AutocommitError::ConfigRead(e.to_string()))?;

    Ok(config.with_env_overrides())
}

/// Save configuration to the default config file.
pub fn save_config(config: &BotConfig) -> Result<()> {
    let path = config_file()?;
    save_config_to(config, &path)
}

/// Save configuration to a specific path.
pub fn save_config_to(config: &BotConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| AutocommitError::ConfigWrite(e.to_string()))?;
    std::fs::write(path, contents)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.remote.branch, "main");
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = BotConfig::default();
        config.remote.username = Some("me".to_string());
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.remote.username.as_deref(), Some("me"));
    }

    #[test]
    fn malformed_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(AutocommitError::ConfigRead(_))));
    }
}
