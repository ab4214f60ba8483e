//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Scheduled placeholder commits.
///
/// Autocommit writes a placeholder source file into a git working tree,
/// commits it, and pushes it to a remote over HTTPS with your username and
/// token, without clobbering uncommitted local work.
#[derive(Parser, Debug)]
#[command(name = "autocommit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Settings shared by `run` and `watch`; each overrides the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetOptions {
    /// Path to the git working tree.
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Placeholder filename to (re)write each run.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Remote branch to pull from and push to.
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Username embedded in the push URL.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Remote URL, without credentials (https).
    #[arg(long)]
    pub remote_url: Option<String>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the commit-and-push workflow once.
    ///
    /// Writes the placeholder file, commits it, and pushes it. A dirty
    /// working tree is stashed (after asking, by default) and the stash is
    /// restored before the command returns.
    Run {
        #[command(flatten)]
        options: TargetOptions,

        /// What to do with uncommitted changes before pulling.
        #[arg(long, value_enum, default_value = "ask")]
        stash: StashArg,
    },

    /// Run the workflow on a fixed interval until Ctrl-C.
    ///
    /// Never prompts; a started run always completes before shutdown takes
    /// effect.
    Watch {
        #[command(flatten)]
        options: TargetOptions,

        /// Minutes between runs.
        #[arg(short, long)]
        interval_minutes: Option<u64>,

        /// What to do with uncommitted changes before pulling.
        #[arg(long, value_enum, default_value = "always")]
        stash: PolicyArg,
    },

    /// Manage the remote access token.
    ///
    /// The token is kept in the OS keyring, never in the config file.
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Write a starter configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts.
    ///
    /// Outputs completion script for the specified shell.
    /// Follow shell-specific instructions to install.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Token subcommands.
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Store a token in the OS keyring (read from stdin).
    Set,

    /// Remove the stored token.
    Clear,

    /// Show where the token would come from, without revealing it.
    Status,
}

/// Stash handling for interactive runs.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StashArg {
    /// Prompt when the tree is dirty.
    Ask,
    /// Always stash a dirty tree.
    Always,
    /// Never stash; proceed with the tree as-is.
    Never,
}

/// Stash handling for unattended runs.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Always stash a dirty tree.
    Always,
    /// Never stash; proceed with the tree as-is.
    Never,
}

/// Supported shell types for the completions command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults_to_asking_about_the_stash() {
        let cli = Cli::try_parse_from(["autocommit", "run"]).unwrap();
        match cli.command {
            Commands::Run { stash, .. } => assert!(matches!(stash, StashArg::Ask)),
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn watch_defaults_to_always_stashing() {
        let cli = Cli::try_parse_from(["autocommit", "watch"]).unwrap();
        match cli.command {
            Commands::Watch { stash, .. } => assert!(matches!(stash, PolicyArg::Always)),
            other => panic!("expected Watch, got {other:?}"),
        }
    }

    #[test]
    fn watch_rejects_ask() {
        assert!(Cli::try_parse_from(["autocommit", "watch", "--stash", "ask"]).is_err());
    }

    #[test]
    fn target_flags_parse() {
        let cli = Cli::try_parse_from([
            "autocommit",
            "run",
            "--repo",
            "/tmp/daily",
            "--file",
            "gen.py",
            "--branch",
            "main",
            "--username",
            "me",
            "--remote-url",
            "https://github.com/me/daily.git",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { options, .. } => {
                assert_eq!(options.repo.as_deref(), Some(std::path::Path::new("/tmp/daily")));
                assert_eq!(options.file.as_deref(), Some("gen.py"));
                assert_eq!(options.username.as_deref(), Some("me"));
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }
}
