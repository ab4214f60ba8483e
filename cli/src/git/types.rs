//! Git-related types for autocommit.
//!
//! This module defines data structures for git operations:
//! - [`WorkingTreeStatus`] - A porcelain-status snapshot of the working tree
//! - [`CommitOutcome`] - Whether a commit was created or was a no-op

/// A snapshot of the working tree, captured once per workflow run from
/// `git status --porcelain`.
///
/// An empty porcelain output means a clean tree; anything else is dirty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingTreeStatus {
    /// One porcelain line per changed path (staged, modified, or untracked).
    pub entries: Vec<String>,
}

impl WorkingTreeStatus {
    /// Parses porcelain v1 output into a status snapshot.
    #[must_use]
    pub fn from_porcelain(stdout: &str) -> Self {
        Self {
            entries: stdout
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Returns true if the working tree has uncommitted changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of changed paths reported by porcelain status.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.entries.len()
    }
}

/// Result of a stash attempt.
///
/// `git stash push` exits 0 with "No local changes to save" when the tree has
/// nothing stashable (e.g. only untracked files) and creates no stash entry,
/// so there is nothing to pop afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashOutcome {
    /// A stash entry was created and must be popped.
    Created,
    /// No stash entry was created; there is nothing to pop.
    NothingToStash,
}

/// Result of a commit attempt.
///
/// A commit with nothing staged is a normal outcome here, not an error:
/// the placeholder content may be identical to what is already committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was created.
    Created,
    /// Nothing was staged; no commit was made.
    NothingToCommit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_porcelain_is_clean() {
        let status = WorkingTreeStatus::from_porcelain("");
        assert!(!status.is_dirty());
        assert_eq!(status.change_count(), 0);
    }

    #[test]
    fn porcelain_lines_become_entries() {
        let status = WorkingTreeStatus::from_porcelain(" M src/main.rs\n?? notes.txt\n");
        assert!(status.is_dirty());
        assert_eq!(status.change_count(), 2);
        assert_eq!(status.entries[1], "?? notes.txt");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let status = WorkingTreeStatus::from_porcelain("\n\n");
        assert!(!status.is_dirty());
    }
}
