//! Command-line interface for autocommit.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, TokenCommands};
