//! Git-specific error types.
//!
//! This module defines error types for git operations:
//! - [`GitError`] - All git-related errors with user-friendly messages

use thiserror::Error;

/// Errors specific to git operations.
#[derive(Error, Debug)]
pub enum GitError {
    /// The configured path is not a git working tree.
    #[error("Not a git repository. Point 'repository.path' at a checked-out working tree.")]
    NotARepository,

    /// The git binary could not be launched at all.
    #[error("Failed to launch git: {0}. Ensure git is installed and on PATH.")]
    GitNotFound(String),

    /// A git command exited with a non-zero status.
    #[error("git {operation} failed: {stderr}")]
    CommandFailed {
        /// The git subcommand that failed (e.g. "pull --rebase").
        operation: String,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The remote rejected the credential during push.
    #[error("Authentication failed while pushing: {0}. Check your username and token ('autocommit token set').")]
    AuthenticationFailed(String),

    /// Conflict during an operation (rebase or stash reapply).
    #[error("Git operation failed due to conflicts: {0}")]
    Conflict(String),
}

impl GitError {
    /// Checks if this error indicates the remote rejected the credential.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_auth_returns_true_for_auth_failures() {
        assert!(GitError::AuthenticationFailed("403".to_string()).is_auth());
    }

    #[test]
    fn is_auth_returns_false_for_other_errors() {
        assert!(!GitError::NotARepository.is_auth());
        assert!(!GitError::Conflict("rebase".to_string()).is_auth());
    }

    #[test]
    fn error_messages_are_user_friendly() {
        let not_repo = GitError::NotARepository;
        assert!(not_repo.to_string().contains("repository.path"));

        let auth = GitError::AuthenticationFailed("denied".to_string());
        assert!(auth.to_string().contains("autocommit token set"));

        let failed = GitError::CommandFailed {
            operation: "pull --rebase".to_string(),
            stderr: "cannot rebase".to_string(),
        };
        assert!(failed.to_string().contains("pull --rebase"));
        assert!(failed.to_string().contains("cannot rebase"));
    }
}
