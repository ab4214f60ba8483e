//! Token command handlers for the autocommit CLI.
//!
//! - [`handle_token_set`] - Store a token in the OS keyring
//! - [`handle_token_clear`] - Remove the stored token
//! - [`handle_token_status`] - Show where the token comes from
//!
//! The token is read from stdin rather than argv so it never lands in shell
//! history or process listings, and it is never printed back.

use std::io::{self, BufRead};

use crate::auth::{Token, TokenStore, TOKEN_ENV};
use crate::error::{AutocommitError, Result};

/// Handles the `autocommit token set` command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, the token is empty, or the
/// keyring is inaccessible.
pub fn handle_token_set() -> Result<()> {
    println!("Paste the access token for the push remote and press Enter:");

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let value = input.trim();

    if value.is_empty() {
        return Err(AutocommitError::Config(
            "Token cannot be empty".to_string(),
        ));
    }

    TokenStore::new()?.save(&Token::new(value))?;
    println!("Token stored in the system keyring.");
    Ok(())
}

/// Handles the `autocommit token clear` command.
///
/// # Errors
///
/// Returns an error if the keyring is inaccessible.
pub fn handle_token_clear() -> Result<()> {
    TokenStore::new()?.delete()?;
    println!("Stored token removed.");
    Ok(())
}

/// Handles the `autocommit token status` command.
///
/// Reports the token source without ever revealing the value.
///
/// # Errors
///
/// Returns an error if the keyring is inaccessible.
pub fn handle_token_status() -> Result<()> {
    if std::env::var(TOKEN_ENV).is_ok_and(|v| !v.is_empty()) {
        println!("Token comes from {TOKEN_ENV} (overrides the keyring).");
        return Ok(());
    }

    if TokenStore::new()?.load()?.is_some() {
        println!("Token stored in the system keyring.");
    } else {
        println!("No token configured.");
        println!();
        println!("Store one with 'autocommit token set' or export {TOKEN_ENV}.");
    }

    Ok(())
}
