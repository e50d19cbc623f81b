//! Access token port.
//!
//! Tokens carry a subject (the user's email) and an expiry, and are signed
//! with a shared secret.
//!
//! # Contract
//!
//! `verify` never distinguishes failure causes: a malformed token, a bad
//! signature and an expired token are all `AuthError::InvalidToken`.

use crate::domain::foundation::{AccessToken, AuthError};

/// Issues and validates bearer tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for `subject` that expires after the configured TTL.
    fn issue(&self, subject: &str) -> Result<AccessToken, AuthError>;

    /// Return the subject of a valid, unexpired token.
    fn verify(&self, token: &str) -> Result<String, AuthError>;
}
