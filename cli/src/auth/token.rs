//! Secure token storage using the operating system keyring.
//!
//! The remote access token is the one real secret in this tool. It is held
//! in a [`Token`] newtype whose `Debug` and `Display` never reveal the value,
//! and persisted only in platform-native secure storage:
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - Windows: Credential Manager
//!
//! Resolution order at run time: the `AUTOCOMMIT_TOKEN` environment variable,
//! then the keyring. The token is never written to the config file.

use std::fmt;

use keyring::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{AutocommitError, Result};

const SERVICE_NAME: &str = "dev.autocommit.cli";
const TOKEN_KEY: &str = "remote_token";

/// Environment variable that overrides the stored token.
pub const TOKEN_ENV: &str = "AUTOCOMMIT_TOKEN";

/// A remote access token.
///
/// Redacted in `Debug` and `Display`; use [`expose`](Self::expose) at the
/// single point where the authenticated remote URL is constructed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(****)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// Secure token storage backed by the OS keyring.
pub struct TokenStore {
    entry: Entry,
}

impl TokenStore {
    /// Creates a new token store instance.
    ///
    /// # Errors
    ///
    /// Returns [`AutocommitError::CredentialStorage`] if the keyring entry
    /// cannot be created, e.g. when the keyring service is unavailable or
    /// locked.
    pub fn new() -> Result<Self> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)
            .map_err(|e| AutocommitError::CredentialStorage(e.to_string()))?;
        Ok(Self { entry })
    }

    /// Saves the token to secure storage, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the keyring is inaccessible.
    pub fn save(&self, token: &Token) -> Result<()> {
        let json = serde_json::to_string(token)?;
        self.entry
            .set_password(&json)
            .map_err(|e| AutocommitError::CredentialStorage(e.to_string()))?;
        Ok(())
    }

    /// Loads the token from secure storage.
    ///
    /// Returns `None` if no token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AutocommitError::CredentialStorage`] if the keyring is
    /// inaccessible or the stored data cannot be parsed.
    pub fn load(&self) -> Result<Option<Token>> {
        match self.entry.get_password() {
            Ok(json) => {
                let token: Token = serde_json::from_str(&json)
                    .map_err(|_| AutocommitError::CredentialStorage("corrupt entry".to_string()))?;
                Ok(Some(token))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AutocommitError::CredentialStorage(e.to_string())),
        }
    }

    /// Deletes the stored token. No-op if none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AutocommitError::CredentialStorage`] if the keyring is
    /// inaccessible.
    pub fn delete(&self) -> Result<()> {
        match self.entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AutocommitError::CredentialStorage(e.to_string())),
        }
    }
}

/// Resolves the token from the environment, falling back to the keyring.
///
/// # Errors
///
/// Returns an error if the keyring is inaccessible.
pub fn resolve_token() -> Result<Option<Token>> {
    if let Ok(value) = std::env::var(TOKEN_ENV) {
        if !value.is_empty() {
            return Ok(Some(Token::new(value)));
        }
    }
    TokenStore::new()?.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_reveals_the_value() {
        let token = Token::new("ghp_supersecret");
        assert_eq!(format!("{token:?}"), "Token(****)");
        assert_eq!(token.to_string(), "****");
    }

    #[test]
    fn expose_returns_the_raw_value() {
        let token = Token::new("ghp_supersecret");
        assert_eq!(token.expose(), "ghp_supersecret");
    }

    #[test]
    fn serializes_transparently() {
        let token = Token::new("abc");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc\"");
        let back: Token = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, token);
    }
}
