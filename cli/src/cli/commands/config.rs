//! Setup command handlers for the autocommit CLI.
//!
//! - [`handle_init`] - Write a starter configuration file
//! - [`handle_completions`] - Generate shell completion scripts

use crate::cli::args::ShellType;
use crate::config::{config_file, save_config, BotConfig};
use crate::error::{AutocommitError, Result};

/// Handles the `autocommit init` command.
///
/// Writes a starter config file with defaults for the operator to fill in.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or cannot
/// be written.
pub fn handle_init(force: bool) -> Result<()> {
    let path = config_file()?;
    if path.exists() && !force {
        return Err(AutocommitError::Config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    save_config(&BotConfig::default())?;

    println!("Wrote starter config to {}.", path.display());
    println!();
    println!("Fill in repository.path, remote.url, and remote.username,");
    println!("then store your token with 'autocommit token set'.");
    Ok(())
}

/// Handles the `autocommit completions <shell>` command.
///
/// Generates shell completion scripts.
pub fn handle_completions(shell: ShellType) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell};

    let mut cmd = crate::cli::Cli::command();
    let shell = match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
    };

    generate(shell, &mut cmd, "autocommit", &mut std::io::stdout());

    Ok(())
}
