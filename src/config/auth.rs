//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Development fallback for the token signing secret.
pub const DEFAULT_SECRET_KEY: &str = "secretkey";

/// Token signing configuration (HS256 shared secret)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify access tokens
    #[serde(default = "default_secret_key")]
    pub secret_key: SecretString,

    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: u64,
}

impl AuthConfig {
    /// Get the access token lifetime as Duration
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_expire_minutes * 60)
    }

    /// Validate authentication configuration
    ///
    /// The development fallback secret is refused in production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.secret_key.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SECRET_KEY"));
        }
        if *environment == Environment::Production && secret == DEFAULT_SECRET_KEY {
            return Err(ValidationError::DefaultSecretInProduction);
        }
        if self.access_token_expire_minutes == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            access_token_expire_minutes: default_access_token_expire_minutes(),
        }
    }
}

fn default_secret_key() -> SecretString {
    SecretString::new(DEFAULT_SECRET_KEY.to_string())
}

fn default_access_token_expire_minutes() -> u64 {
    60
}
