//! Handlers acting on an existing checkout session.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::checkout::CheckoutError;
use crate::ports::PaymentGateway;

/// Fetches a checkout session as the gateway reports it.
pub struct RetrieveCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl RetrieveCheckoutHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, session_id: &str) -> Result<Value, CheckoutError> {
        Ok(self.gateway.retrieve_checkout_session(session_id).await?)
    }
}

/// Expires a checkout session so it can no longer be paid.
pub struct ExpireCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl ExpireCheckoutHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, session_id: &str) -> Result<Value, CheckoutError> {
        let response = self.gateway.expire_checkout_session(session_id).await?;
        tracing::info!(session_id, "Checkout session expired");
        Ok(response)
    }
}
