//! User module - registered accounts.
//!
//! A user is an email plus a password hash. Accounts are created at
//! registration and read at login; there is no update or delete flow.

mod email;

pub use email::{normalize as normalize_email, Email};

use serde::Serialize;

use super::foundation::{UserId, ValidationError};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: String,
}

impl User {
    /// Public projection of the account; never includes the hash.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.as_str().to_string(),
            is_active: true,
        }
    }
}

/// An account about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub is_active: bool,
}

/// Registration input after shape validation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: Email,
    pub password: String,
}

impl Registration {
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let email = Email::parse(username)?;
        if password.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}
