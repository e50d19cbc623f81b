//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid listen address: {0}")]
    InvalidListenAddress(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Default token signing secret must not be used in production")]
    DefaultSecretInProduction,

    #[error("Access token lifetime must be at least one minute")]
    InvalidTokenTtl,

    #[error("Payment gateway base URL must use HTTPS")]
    GatewayUrlMustBeHttps,

    #[error("Plan cycle count must be at least 1")]
    InvalidCycleCount,

    #[error("Webhook secret is set but empty")]
    EmptyWebhookSecret,
}
