//! The stash-consent decision capability.
//!
//! The engine never talks to a terminal directly. When the working tree is
//! dirty it asks an injected [`StashConsent`] whether to stash, so the core
//! stays testable without a display and front-ends decide how the question
//! is answered (a prompt, a flag, a fixed policy).

use std::io::{self, Write};

use crate::git::WorkingTreeStatus;

/// Answer to "stash pre-existing changes before pulling?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Stash now; the engine guarantees the stash is popped before returning.
    Stash,
    /// Leave the tree as-is and proceed; downstream conflicts are surfaced.
    Proceed,
}

/// Capability for answering the stash question when the tree is dirty.
#[cfg_attr(test, mockall::automock)]
pub trait StashConsent {
    /// Decides whether the dirty working tree should be stashed.
    fn confirm_stash(&self, status: &WorkingTreeStatus) -> Decision;
}

/// A fixed, non-interactive stash policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashPolicy {
    /// Always stash a dirty tree.
    Always,
    /// Never stash; proceed with the tree as-is.
    Never,
}

impl StashConsent for StashPolicy {
    fn confirm_stash(&self, _status: &WorkingTreeStatus) -> Decision {
        match self {
            Self::Always => Decision::Stash,
            Self::Never => Decision::Proceed,
        }
    }
}

/// Interactive consent that asks on stdin.
///
/// Anything other than an explicit `y` declines, including a failed read, so
/// an unattended terminal never blocks the run on a stash it cannot answer
/// for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConsent;

impl StashConsent for PromptConsent {
    fn confirm_stash(&self, status: &WorkingTreeStatus) -> Decision {
        print!(
            "Working tree has {} uncommitted change(s). Stash them before pulling? [y/N] ",
            status.change_count()
        );
        if io::stdout().flush().is_err() {
            return Decision::Proceed;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return Decision::Proceed;
        }

        if input.trim().eq_ignore_ascii_case("y") {
            Decision::Stash
        } else {
            Decision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirty_status() -> WorkingTreeStatus {
        WorkingTreeStatus::from_porcelain(" M src/main.rs\n")
    }

    #[test]
    fn always_policy_stashes() {
        assert_eq!(
            StashPolicy::Always.confirm_stash(&dirty_status()),
            Decision::Stash
        );
    }

    #[test]
    fn never_policy_proceeds() {
        assert_eq!(
            StashPolicy::Never.confirm_stash(&dirty_status()),
            Decision::Proceed
        );
    }
}
