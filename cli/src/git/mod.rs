//! Git operations module for autocommit.
//!
//! Provides an abstraction layer over the git command surface the
//! commit-and-push workflow depends on:
//! - Working-tree status (porcelain)
//! - Stash push/pop
//! - Rebase pull, staging, commit, remote configuration, push

pub mod error;
pub mod operations;
pub mod types;

pub use error::GitError;
pub use operations::{GitCli, GitOperations};
pub use types::{CommitOutcome, StashOutcome, WorkingTreeStatus};

#[cfg(test)]
pub use operations::MockGitOperations;
