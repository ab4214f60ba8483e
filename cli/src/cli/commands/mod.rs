//! Command implementations.

pub mod config;
pub mod run;
pub mod token;

pub use config::{handle_completions, handle_init};
pub use run::{handle_run, handle_watch};
pub use token::{handle_token_clear, handle_token_set, handle_token_status};
