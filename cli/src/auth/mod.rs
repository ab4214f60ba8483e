//! Credential handling for autocommit.

pub mod token;

pub use token::{resolve_token, Token, TokenStore, TOKEN_ENV};
