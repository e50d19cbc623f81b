//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration (PayMongo)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// PayMongo public key (pk_...)
    pub public_key: String,

    /// PayMongo secret key (sk_...)
    pub secret_key: SecretString,

    /// Pre-encoded credential sent as `Authorization: Basic <token>`
    pub basic_token: SecretString,

    /// Webhook signing secret; the secret key is used when unset
    #[serde(default)]
    pub webhook_secret: Option<SecretString>,

    /// Base URL of the PayMongo REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Redirect after a completed checkout
    #[serde(default = "default_success_url")]
    pub checkout_success_url: String,

    /// Redirect after a cancelled checkout
    #[serde(default = "default_cancel_url")]
    pub checkout_cancel_url: String,

    /// Statement descriptor shown on the customer's bill
    #[serde(default = "default_statement_descriptor")]
    pub statement_descriptor: String,

    /// Number of billing cycles a gateway plan runs for
    #[serde(default = "default_plan_cycle_count")]
    pub plan_cycle_count: u32,
}

impl PaymentConfig {
    /// Secret used to verify inbound webhook signatures.
    pub fn webhook_signing_secret(&self) -> &SecretString {
        self.webhook_secret.as_ref().unwrap_or(&self.secret_key)
    }

    /// Check if using PayMongo test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.expose_secret().starts_with("sk_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.public_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__PUBLIC_KEY"));
        }
        if self.secret_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__SECRET_KEY"));
        }
        if self.basic_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__BASIC_TOKEN"));
        }
        if let Some(secret) = &self.webhook_secret {
            if secret.expose_secret().trim().is_empty() {
                return Err(ValidationError::EmptyWebhookSecret);
            }
        }
        if !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::GatewayUrlMustBeHttps);
        }
        if self.plan_cycle_count == 0 {
            return Err(ValidationError::InvalidCycleCount);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            secret_key: SecretString::new(String::new()),
            basic_token: SecretString::new(String::new()),
            webhook_secret: None,
            api_base_url: default_api_base_url(),
            checkout_success_url: default_success_url(),
            checkout_cancel_url: default_cancel_url(),
            statement_descriptor: default_statement_descriptor(),
            plan_cycle_count: default_plan_cycle_count(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.paymongo.com/v1".to_string()
}

fn default_success_url() -> String {
    "https://example.com/success".to_string()
}

fn default_cancel_url() -> String {
    "https://example.com/cancel".to_string()
}

fn default_statement_descriptor() -> String {
    "Test Payment".to_string()
}

fn default_plan_cycle_count() -> u32 {
    12
}
