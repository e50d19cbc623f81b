//! Billing API server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paymongo_billing::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use paymongo_billing::adapters::http::{api_router, AppState};
use paymongo_billing::adapters::paymongo::{PayMongoClient, PayMongoConfig};
use paymongo_billing::adapters::payments::LoggingPaymentEventSink;
use paymongo_billing::adapters::postgres::PgUnitOfWorkFactory;
use paymongo_billing::config::{AppConfig, ServerConfig};
use paymongo_billing::domain::webhook::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    tracing::info!(
        environment = ?config.server.environment,
        test_mode = config.payment.is_test_mode(),
        "Starting billing API"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    let gateway = PayMongoClient::new(PayMongoConfig::from_payment_config(&config.payment));
    let verifier = WebhookVerifier::new(config.payment.webhook_signing_secret().clone());

    let state = AppState::new(
        Arc::new(PgUnitOfWorkFactory::new(pool)),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(JwtTokenService::from_config(&config.auth)),
        Arc::new(gateway),
        verifier,
        Arc::new(LoggingPaymentEventSink::new()),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, api_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&server.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if server.log_json {
        registry.with(fmt::layer().json().with_current_span(true)).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
