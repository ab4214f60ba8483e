//! Git operations abstraction for autocommit.
//!
//! This module provides a trait-based abstraction over the git command
//! surface the workflow depends on:
//! - [`GitOperations`] - Trait defining the commands the engine invokes
//! - [`GitCli`] - Implementation shelling out to the `git` binary
//!
//! The engine only depends on exit status and, for `status`, on porcelain
//! stdout being empty for a clean tree. Nothing from libgit2 is linked in;
//! the repository is an opaque external system behind its own CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::git::error::GitError;
use crate::git::types::{CommitOutcome, StashOutcome, WorkingTreeStatus};

/// Trait for git operations (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait GitOperations: Send {
    /// Captures the working-tree status from porcelain output.
    ///
    /// # Errors
    ///
    /// Returns an error if not in a git repository or the status query fails.
    fn status(&self) -> Result<WorkingTreeStatus, GitError>;

    /// Stashes tracked working-tree changes under the given message.
    ///
    /// Returns [`StashOutcome::NothingToStash`] when git creates no stash
    /// entry (a tree dirty only with untracked files); callers must not pop
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the stash cannot be created.
    fn stash_push(&mut self, message: &str) -> Result<StashOutcome, GitError>;

    /// Pops the most recent stash.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Conflict`] if the stashed changes do not reapply
    /// cleanly, or another error if the pop fails outright.
    fn stash_pop(&mut self) -> Result<(), GitError>;

    /// Pulls the remote branch with rebase semantics.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Conflict`] on rebase conflicts.
    fn pull_rebase(&mut self, remote: &str, branch: &str) -> Result<(), GitError>;

    /// Stages all working-tree changes, including untracked files.
    ///
    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn add_all(&mut self) -> Result<(), GitError>;

    /// Commits staged changes with the given message.
    ///
    /// Returns [`CommitOutcome::NothingToCommit`] when nothing is staged
    /// instead of treating that as a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails for any other reason.
    fn commit(&mut self, message: &str) -> Result<CommitOutcome, GitError>;

    /// Points the named remote at the given URL.
    ///
    /// The URL may carry embedded credentials; callers are responsible for
    /// never logging it.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote cannot be reconfigured.
    fn set_remote_url(&mut self, remote: &str, url: &str) -> Result<(), GitError>;

    /// Pushes the current branch to the named remote branch.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::AuthenticationFailed`] when the remote rejects the
    /// credential, or [`GitError::CommandFailed`] for other rejections.
    fn push(&mut self, remote: &str, branch: &str) -> Result<(), GitError>;
}

/// Git operations implementation using the `git` binary.
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Opens a working tree at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path does not exist or is
    /// not inside a git working tree.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GitError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(GitError::NotARepository);
        }

        let probe = Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(path)
            .output()
            .map_err(|e| GitError::GitNotFound(e.to_string()))?;

        if !probe.status.success() {
            return Err(GitError::NotARepository);
        }

        Ok(Self {
            repo_path: path.to_path_buf(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::GitNotFound(e.to_string()))
    }

    fn run_checked(&self, operation: &str, args: &[&str]) -> Result<Output, GitError> {
        let output = self.run(args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Push rejections that mean the credential was refused, not the ref.
fn is_auth_rejection(stderr: &str) -> bool {
    stderr.contains("Authentication failed")
        || stderr.contains("could not read Username")
        || stderr.contains("Invalid username or")
        || stderr.contains("Support for password authentication was removed")
        || stderr.contains("403")
}

impl GitOperations for GitCli {
    fn status(&self) -> Result<WorkingTreeStatus, GitError> {
        let output = self.run_checked("status", &["status", "--porcelain"])?;
        Ok(WorkingTreeStatus::from_porcelain(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    fn stash_push(&mut self, message: &str) -> Result<StashOutcome, GitError> {
        let output = self.run_checked("stash push", &["stash", "push", "-m", message])?;

        // git exits 0 without creating an entry when nothing is stashable,
        // the same way an empty commit is a normal outcome for commit().
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("No local changes to save") {
            Ok(StashOutcome::NothingToStash)
        } else {
            Ok(StashOutcome::Created)
        }
    }

    fn stash_pop(&mut self) -> Result<(), GitError> {
        match self.run_checked("stash pop", &["stash", "pop"]) {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { stderr, .. })
                if stderr.to_lowercase().contains("conflict") =>
            {
                Err(GitError::Conflict(stderr))
            }
            Err(e) => Err(e),
        }
    }

    fn pull_rebase(&mut self, remote: &str, branch: &str) -> Result<(), GitError> {
        match self.run_checked("pull --rebase", &["pull", "--rebase", remote, branch]) {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { stderr, .. })
                if stderr.to_lowercase().contains("conflict") =>
            {
                Err(GitError::Conflict(stderr))
            }
            Err(e) => Err(e),
        }
    }

    fn add_all(&mut self) -> Result<(), GitError> {
        self.run_checked("add", &["add", "--all"])?;
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<CommitOutcome, GitError> {
        let output = self.run(&["commit", "-m", message])?;
        if output.status.success() {
            return Ok(CommitOutcome::Created);
        }

        // An empty commit exits non-zero but is a normal outcome for this
        // workflow, so sniff git's wording before treating it as a failure.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stdout.contains("nothing to commit")
            || stdout.contains("nothing added to commit")
            || stderr.contains("nothing to commit")
        {
            Ok(CommitOutcome::NothingToCommit)
        } else {
            Err(GitError::CommandFailed {
                operation: "commit".to_string(),
                stderr: if stderr.trim().is_empty() {
                    stdout.trim().to_string()
                } else {
                    stderr.trim().to_string()
                },
            })
        }
    }

    fn set_remote_url(&mut self, remote: &str, url: &str) -> Result<(), GitError> {
        self.run_checked("remote set-url", &["remote", "set-url", remote, url])?;
        Ok(())
    }

    fn push(&mut self, remote: &str, branch: &str) -> Result<(), GitError> {
        match self.run_checked("push", &["push", remote, branch]) {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { stderr, .. }) if is_auth_rejection(&stderr) => {
                Err(GitError::AuthenticationFailed(stderr))
            }
            Err(e) => Err(e),
        }
    }
}
