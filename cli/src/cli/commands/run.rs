//! Workflow command handlers for the autocommit CLI.
//!
//! This module implements the two workflow entry points:
//! - [`handle_run`] - One commit-and-push run (`autocommit run`)
//! - [`handle_watch`] - Periodic runs until Ctrl-C (`autocommit watch`)
//!
//! Both resolve the effective [`WorkflowConfig`] from the config file, CLI
//! flags, and the token source, then hand off to [`crate::workflow`].

use std::time::Duration;

use url::Url;

use crate::auth::resolve_token;
use crate::cli::args::{PolicyArg, StashArg, TargetOptions};
use crate::config::{load_config, BotConfig};
use crate::error::{AutocommitError, Result};
use crate::git::GitCli;
use crate::scheduler::{run_periodic, shutdown_channel};
use crate::workflow::{
    placeholder_script, run_workflow, Outcome, PromptConsent, RunResult, Stage, StashConsent,
    StashPolicy, WorkflowConfig,
};

/// Resolves the effective workflow configuration.
///
/// CLI flags win over the config file. The token is resolved last so setup
/// errors about missing settings surface before the keyring is touched.
fn build_workflow_config(config: &BotConfig, options: &TargetOptions) -> Result<WorkflowConfig> {
    let repo_path = options
        .repo
        .clone()
        .or_else(|| config.repository.path.clone())
        .ok_or(AutocommitError::MissingSetting("repository.path"))?;

    let file_name = options
        .file
        .clone()
        .unwrap_or_else(|| config.repository.file_name.clone());

    let username = options
        .username
        .clone()
        .or_else(|| config.remote.username.clone())
        .ok_or(AutocommitError::MissingSetting("remote.username"))?;

    let remote_url = match &options.remote_url {
        Some(raw) => Url::parse(raw)?,
        None => config
            .remote
            .url
            .clone()
            .ok_or(AutocommitError::MissingSetting("remote.url"))?,
    };

    let branch = options
        .branch
        .clone()
        .unwrap_or_else(|| config.remote.branch.clone());

    let token = resolve_token()?.ok_or(AutocommitError::TokenNotFound)?;

    Ok(WorkflowConfig {
        content: placeholder_script(&username),
        repo_path,
        file_name,
        username,
        token,
        remote_url,
        remote_name: config.remote.name.clone(),
        branch,
    })
}

/// Human-readable name for a workflow stage.
const fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Sanitize => "filename sanitization",
        Stage::WriteFile => "file write",
        Stage::Status => "status check",
        Stage::Stash => "stash",
        Stage::Pull => "pull --rebase",
        Stage::Add => "staging",
        Stage::Commit => "commit",
        Stage::ConfigureRemote => "remote configuration",
        Stage::Push => "push",
        Stage::Done => "completion",
    }
}

/// Handles the `autocommit run` command.
///
/// # Errors
///
/// Returns an error if configuration is incomplete, the path is not a git
/// working tree, or the run itself fails. A failed stash restore is reported
/// as [`AutocommitError::StashRestore`] with a manual-recovery hint.
pub fn handle_run(options: &TargetOptions, stash: StashArg) -> Result<()> {
    let config = load_config()?;
    let workflow = build_workflow_config(&config, options)?;
    let mut git = GitCli::open(&workflow.repo_path)?;

    let consent: Box<dyn StashConsent> = match stash {
        StashArg::Ask => Box::new(PromptConsent),
        StashArg::Always => Box::new(StashPolicy::Always),
        StashArg::Never => Box::new(StashPolicy::Never),
    };

    let result = run_workflow(&workflow, &mut git, consent.as_ref());
    finish(result)
}

/// Converts a run result into the process outcome for `run`.
fn finish(result: RunResult) -> Result<()> {
    match result.outcome {
        Outcome::Pushed => {
            println!("Committed and pushed.");
            Ok(())
        }
        Outcome::NothingToCommit => {
            println!("Nothing to commit; push skipped.");
            Ok(())
        }
        Outcome::Failed(e) => Err(AutocommitError::RunFailed {
            stage: stage_label(result.stage).to_string(),
            message: e.to_string(),
        }),
        Outcome::StashRestoreFailed { restore, run } => {
            if let Some(prior) = run {
                eprintln!("Run failed during {}: {prior}", stage_label(result.stage));
            }
            Err(AutocommitError::StashRestore(restore.to_string()))
        }
    }
}

/// Handles the `autocommit watch` command.
///
/// Runs the workflow once per interval until Ctrl-C. Failures of individual
/// runs are reported and the loop continues; a started run always completes
/// before shutdown takes effect.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the path is not a git
/// working tree.
pub async fn handle_watch(
    options: &TargetOptions,
    interval_minutes: Option<u64>,
    stash: PolicyArg,
) -> Result<()> {
    let config = load_config()?;
    let workflow = build_workflow_config(&config, options)?;

    // Fail fast on a bad repository path instead of on the first tick.
    GitCli::open(&workflow.repo_path)?;

    let interval = interval_minutes.map_or_else(
        || config.schedule.interval(),
        |minutes| Duration::from_secs(minutes.max(1).saturating_mul(60)),
    );
    let policy = match stash {
        PolicyArg::Always => StashPolicy::Always,
        PolicyArg::Never => StashPolicy::Never,
    };

    println!(
        "Running every {} minute(s); Ctrl-C to stop.",
        interval.as_secs() / 60
    );

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let work = move || {
        let config = workflow.clone();
        match GitCli::open(&config.repo_path) {
            Ok(mut git) => run_workflow(&config, &mut git, &policy),
            Err(e) => RunResult {
                stage: Stage::Status,
                outcome: Outcome::Failed(e.into()),
            },
        }
    };

    let mut failures: u64 = 0;
    let iterations = run_periodic(interval, shutdown_rx, work, |result| {
        if !result.success() {
            failures += 1;
        }
        report_iteration(&result);
    })
    .await;

    println!("Stopped after {iterations} run(s), {failures} failed.");
    Ok(())
}

/// Reports one watch iteration's result.
fn report_iteration(result: &RunResult) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    match &result.outcome {
        Outcome::Pushed => println!("[{now}] committed and pushed"),
        Outcome::NothingToCommit => println!("[{now}] nothing to commit; push skipped"),
        Outcome::Failed(e) => {
            eprintln!("[{now}] run failed during {}: {e}", stage_label(result.stage));
        }
        Outcome::StashRestoreFailed { restore, run } => {
            if let Some(prior) = run {
                eprintln!("[{now}] run failed during {}: {prior}", stage_label(result.stage));
            }
            eprintln!(
                "[{now}] STASH RESTORE FAILED: {restore}. \
                 Your uncommitted changes may still be in the stash; run 'git stash pop' manually."
            );
        }
    }
}
