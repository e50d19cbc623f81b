//! WebhookSubscriptionsHandler - registers our endpoint with the gateway.
//!
//! Every operation is a single gateway call whose response is returned as is.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::gateway::GatewayError;
use crate::ports::{PaymentGateway, WebhookSubscription};

/// Handler for the gateway's webhook registration endpoints.
pub struct WebhookSubscriptionsHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl WebhookSubscriptionsHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, subscription: WebhookSubscription) -> Result<Value, GatewayError> {
        let response = self.gateway.create_webhook(&subscription).await?;
        tracing::info!(
            url = %subscription.url,
            events = ?subscription.events,
            "Webhook subscription created"
        );
        Ok(response)
    }

    pub async fn list(&self) -> Result<Value, GatewayError> {
        self.gateway.list_webhooks().await
    }

    pub async fn get(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        self.gateway.get_webhook(webhook_id).await
    }

    pub async fn update(
        &self,
        webhook_id: &str,
        subscription: WebhookSubscription,
    ) -> Result<Value, GatewayError> {
        let response = self.gateway.update_webhook(webhook_id, &subscription).await?;
        tracing::info!(webhook_id, url = %subscription.url, "Webhook subscription updated");
        Ok(response)
    }

    pub async fn enable(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        let response = self.gateway.enable_webhook(webhook_id).await?;
        tracing::info!(webhook_id, "Webhook subscription enabled");
        Ok(response)
    }

    pub async fn disable(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        let response = self.gateway.disable_webhook(webhook_id).await?;
        tracing::info!(webhook_id, "Webhook subscription disabled");
        Ok(response)
    }
}
