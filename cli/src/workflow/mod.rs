//! The commit-and-push workflow engine for autocommit.
//!
//! Given a repository, a target filename, placeholder content, and remote
//! credentials, produce one commit containing that file and push it, without
//! losing pre-existing uncommitted work:
//! - [`run_workflow`] - The single-shot engine
//! - [`StashConsent`] - Injected decision capability for dirty trees
//! - [`RunResult`] / [`Outcome`] / [`Stage`] - What a run produced

pub mod consent;
pub mod content;
pub mod engine;
pub mod filename;
pub mod types;

#[allow(unused_imports)]
pub use consent::{Decision, PromptConsent, StashConsent, StashPolicy};
#[allow(unused_imports)]
pub use content::{commit_message, placeholder_script};
#[allow(unused_imports)]
pub use engine::{run_workflow, STASH_MESSAGE};
#[allow(unused_imports)]
pub use filename::sanitize_filename;
#[allow(unused_imports)]
pub use types::{Outcome, RunResult, Stage, WorkflowConfig, WorkflowError};

#[cfg(test)]
#[allow(unused_imports)]
pub use consent::MockStashConsent;
