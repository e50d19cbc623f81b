//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what a verified bearer token resolves to. The token
//! subject is the user's email, so that is all it carries.

use serde::Serialize;
use thiserror::Error;

/// Caller identity extracted from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// Token subject (the user's email).
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// A freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Authentication errors.
///
/// Token verification collapses every decode, signature and expiry failure
/// into `InvalidToken`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, expired, or has an invalid signature.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Unknown email or wrong password.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Token could not be produced.
    #[error("Token issuance failed: {0}")]
    IssuanceFailed(String),
}

impl AuthError {
    /// Returns true if the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::InvalidCredentials)
    }
}
