//! Application configuration settings.
//!
//! Credentials never live here: the token comes from the environment or the
//! OS keyring (see [`crate::auth`]), and the remote URL in config is the
//! plain, credential-free form.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Main configuration for autocommit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Target repository settings.
    pub repository: RepositoryConfig,
    /// Remote and credential-owner settings.
    pub remote: RemoteConfig,
    /// Periodic run settings.
    pub schedule: ScheduleConfig,
}

/// Target repository configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Filesystem location of the git working tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Placeholder filename to (re)write each run.
    pub file_name: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            file_name: "auto_generated_script.py".to_string(),
        }
    }
}

/// Remote configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Remote URL without credentials (https).
    #[serde(with = "opt_url_serde", skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// Username embedded in the push URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Branch to pull from and push to.
    pub branch: String,
    /// Remote name to reconfigure and push to.
    pub name: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            username: None,
            branch: "main".to_string(),
            name: "origin".to_string(),
        }
    }
}

/// Periodic run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minutes between runs; clamped to at least one minute.
    pub interval_minutes: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        // 24 hours, matching the daily-commit use case.
        Self {
            interval_minutes: 1440,
        }
    }
}

impl ScheduleConfig {
    /// The sleep interval between runs.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        let minutes = if self.interval_minutes == 0 {
            1
        } else {
            self.interval_minutes
        };
        Duration::from_secs(minutes.saturating_mul(60))
    }
}

/// Custom serde module for optional URL serialization.
mod opt_url_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use url::Url;

    pub fn serialize<S>(url: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match url {
            Some(url) => serializer.serialize_some(url.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| Url::parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Environment variables that can override configuration.
pub mod env {
    /// Remote branch override.
    pub const BRANCH: &str = "AUTOCOMMIT_BRANCH";
    /// Tracing filter (read at startup, not here).
    pub const LOG_LEVEL: &str = "AUTOCOMMIT_LOG";
}

impl BotConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(branch) = std::env::var(env::BRANCH) {
            if !branch.is_empty() {
                self.remote.branch = branch;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_daily_commit_use_case() {
        let config = BotConfig::default();
        assert_eq!(config.repository.file_name, "auto_generated_script.py");
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.remote.name, "origin");
        assert_eq!(config.schedule.interval_minutes, 1440);
    }

    #[test]
    fn interval_is_clamped_to_one_minute() {
        let schedule = ScheduleConfig {
            interval_minutes: 0,
        };
        assert_eq!(schedule.interval(), Duration::from_secs(60));
    }

    #[test]
    fn huge_interval_saturates_instead_of_overflowing() {
        let schedule = ScheduleConfig {
            interval_minutes: u64::MAX,
        };
        assert_eq!(schedule.interval(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = BotConfig::default();
        config.repository.path = Some(PathBuf::from("/home/me/daily"));
        config.remote.url = Some(Url::parse("https://github.com/me/daily.git").unwrap());
        config.remote.username = Some("me".to_string());

        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: BotConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed.repository.path, config.repository.path);
        assert_eq!(parsed.remote.url, config.remote.url);
        assert_eq!(parsed.remote.username, config.remote.username);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let parsed: BotConfig = toml::from_str(
            r#"
            [remote]
            username = "me"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.remote.username.as_deref(), Some("me"));
        assert_eq!(parsed.remote.branch, "main");
        assert_eq!(parsed.schedule.interval_minutes, 1440);
    }
}
