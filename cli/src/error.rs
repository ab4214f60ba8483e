//! Error types and result aliases for autocommit.
//!
//! This module provides the top-level error type with:
//! - Specific variants for different failure modes
//! - User-friendly messages with recovery suggestions
//! - Helper methods for error classification
//! - Automatic conversion from common error types

use thiserror::Error;

use crate::git::GitError;

/// Main error type for autocommit operations.
///
/// Each variant includes a user-friendly message with actionable recovery
/// steps. Use [`requires_setup`](Self::requires_setup) to detect errors that
/// are fixed by configuring the tool rather than retrying.
#[derive(Error, Debug)]
pub enum AutocommitError {
    /// No token is available from the environment or the keyring.
    #[error("No token configured. Set AUTOCOMMIT_TOKEN or run 'autocommit token set'.")]
    TokenNotFound,

    /// A required setting is absent from config and flags.
    #[error("Missing setting '{0}'. Add it to the config file ('autocommit init') or pass the matching flag.")]
    MissingSetting(&'static str),

    /// Failed to access the OS keyring.
    #[error("Failed to access credential storage: {0}. Ensure your system keyring is unlocked.")]
    CredentialStorage(String),

    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read the configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// Failed to write the configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// A workflow run failed at a named stage.
    #[error("Run failed during {stage}: {message}")]
    RunFailed {
        /// Human-readable stage name.
        stage: String,
        /// The underlying failure.
        message: String,
    },

    /// The stash created for the run could not be restored.
    #[error("Stash restore failed: {0}. Your uncommitted changes may still be in the stash; run 'git stash pop' manually.")]
    StashRestore(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or TOML serialization/deserialization failed.
    #[error("Data serialization error: {0}. This may indicate corrupted data.")]
    Serialization(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl AutocommitError {
    /// Checks if this error is resolved by configuring the tool (config file,
    /// flags, or token) rather than by retrying.
    #[must_use]
    pub const fn requires_setup(&self) -> bool {
        matches!(
            self,
            Self::TokenNotFound | Self::MissingSetting(_) | Self::Config(_) | Self::ConfigRead(_)
        )
    }
}

/// Result type alias using [`AutocommitError`].
pub type Result<T> = std::result::Result<T, AutocommitError>;

impl From<serde_json::Error> for AutocommitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for AutocommitError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<toml::ser::Error> for AutocommitError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigWrite(format!("TOML serialize error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_friendly() {
        let token = AutocommitError::TokenNotFound;
        assert!(token.to_string().contains("autocommit token set"));

        let missing = AutocommitError::MissingSetting("remote.username");
        assert!(missing.to_string().contains("remote.username"));
        assert!(missing.to_string().contains("autocommit init"));

        let stash = AutocommitError::StashRestore("conflict".to_string());
        assert!(stash.to_string().contains("git stash pop"));
    }

    #[test]
    fn requires_setup_identifies_configuration_errors() {
        assert!(AutocommitError::TokenNotFound.requires_setup());
        assert!(AutocommitError::MissingSetting("repository.path").requires_setup());
        assert!(AutocommitError::Config("bad".to_string()).requires_setup());

        assert!(!AutocommitError::Git(GitError::NotARepository).requires_setup());
        assert!(!AutocommitError::StashRestore("x".to_string()).requires_setup());
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: AutocommitError = json_err.into();
        assert!(matches!(err, AutocommitError::Serialization(_)));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AutocommitError = io_err.into();
        assert!(matches!(err, AutocommitError::Io(_)));
    }

    #[test]
    fn from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: AutocommitError = url_err.into();
        assert!(matches!(err, AutocommitError::InvalidUrl(_)));
    }
}
