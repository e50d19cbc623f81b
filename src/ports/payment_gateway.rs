//! Payment gateway port.
//!
//! One operation per remote endpoint. Responses are handed back as opaque
//! JSON; non-2xx answers surface as `GatewayError::Upstream` carrying the
//! status and body unchanged. Implementations do not retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::checkout::CheckoutOrder;
use crate::domain::gateway::GatewayError;
use crate::domain::plan::NewPricingPlan;

/// Remote payment API (checkout sessions, subscription plans, webhooks).
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session for a single-item order.
    async fn create_checkout_session(&self, order: &CheckoutOrder) -> Result<Value, GatewayError>;

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError>;

    async fn expire_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError>;

    /// Mirror a pricing plan as a gateway subscription plan.
    async fn create_plan(&self, plan: &NewPricingPlan) -> Result<Value, GatewayError>;

    async fn create_webhook(&self, subscription: &WebhookSubscription)
        -> Result<Value, GatewayError>;

    async fn list_webhooks(&self) -> Result<Value, GatewayError>;

    async fn get_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError>;

    async fn enable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError>;

    async fn disable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError>;

    async fn update_webhook(
        &self,
        webhook_id: &str,
        subscription: &WebhookSubscription,
    ) -> Result<Value, GatewayError>;
}

/// Webhook endpoint registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSubscription {
    /// Endpoint the gateway will POST deliveries to.
    pub url: String,

    /// Event types to deliver, e.g. `payment.paid`.
    pub events: Vec<String>,
}
