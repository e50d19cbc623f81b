//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A syntactically valid, lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    ///
    /// Accepts `local@domain.tld`; surrounding whitespace is trimmed and the
    /// result is lowercased.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let candidate = normalize(raw);
        if candidate.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if candidate.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "contains whitespace"));
        }

        let (local, domain) = candidate
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;

        if local.is_empty() {
            return Err(ValidationError::invalid_format("email", "missing local part"));
        }
        if domain.contains('@') {
            return Err(ValidationError::invalid_format("email", "multiple @ symbols"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ValidationError::invalid_format("email", "invalid domain"));
        }

        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Wraps a value that was validated before it was stored.
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }
}

/// Lookup form of an address: trimmed and lowercased, not validated.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
