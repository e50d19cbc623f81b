//! PayMongo REST client.
//!
//! Implements the `PaymentGateway` port over `reqwest`. Every call sends the
//! configured pre-encoded credential as `Authorization: Basic <token>`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayMongoConfig::from_payment_config(&app_config.payment);
//! let gateway = PayMongoClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{header, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::PaymentConfig;
use crate::domain::checkout::CheckoutOrder;
use crate::domain::gateway::{resource_id, GatewayError};
use crate::domain::plan::NewPricingPlan;
use crate::ports::{PaymentGateway, WebhookSubscription};

use super::api_types::{
    CheckoutSessionAttributes, CheckoutSettings, Envelope, PlanAttributes, WebhookAttributes,
};

/// PayMongo API configuration.
#[derive(Clone)]
pub struct PayMongoConfig {
    /// Pre-encoded basic credential.
    basic_token: SecretString,

    /// Base URL for the API (default: https://api.paymongo.com/v1).
    api_base_url: String,

    checkout: CheckoutSettings,

    plan_cycle_count: u32,
}

impl PayMongoConfig {
    /// Build from the application's payment section.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self {
            basic_token: config.basic_token.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            checkout: CheckoutSettings {
                success_url: config.checkout_success_url.clone(),
                cancel_url: config.checkout_cancel_url.clone(),
                statement_descriptor: config.statement_descriptor.clone(),
            },
            plan_cycle_count: config.plan_cycle_count,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// PayMongo payment gateway adapter.
pub struct PayMongoClient {
    config: PayMongoConfig,
    http_client: reqwest::Client,
}

impl PayMongoClient {
    /// Create a new client. No request timeout is configured.
    pub fn new(config: PayMongoConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Builds `<base>/<segments...>`. Each segment is percent-encoded on its
    /// own, so it can never add path levels.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.config.api_base_url)
            .map_err(|e| GatewayError::Transport(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Transport("API base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, GatewayError> {
        let url = self.endpoint(segments)?;
        Ok(self
            .http_client
            .request(method, url)
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", self.config.basic_token.expose_secret()),
            )
            .header(header::ACCEPT, "application/json"))
    }

    /// Send a request and hand back the JSON body, or the upstream failure verbatim.
    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Value, GatewayError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "PayMongo request failed");
            GatewayError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(operation, status = status.as_u16(), error = %e, "PayMongo response unreadable");
            GatewayError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!(
                operation,
                status = status.as_u16(),
                body = %text,
                "PayMongo returned an error"
            );
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(GatewayError::upstream(status.as_u16(), body));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(operation, error = %e, "PayMongo response is not JSON");
            GatewayError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl PaymentGateway for PayMongoClient {
    async fn create_checkout_session(&self, order: &CheckoutOrder) -> Result<Value, GatewayError> {
        let body = Envelope::new(CheckoutSessionAttributes::from_order(
            order,
            &self.config.checkout,
        ));
        tracing::info!(
            reference_number = %body.data.attributes.reference_number,
            amount = order.amount_in_centavos(),
            "Creating checkout session"
        );
        let request = self.request(Method::POST, &["checkout_sessions"])?.json(&body);
        self.execute("create_checkout_session", request).await
    }

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError> {
        let request = self.request(Method::GET, &["checkout_sessions", resource_id(session_id)?])?;
        self.execute("retrieve_checkout_session", request).await
    }

    async fn expire_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError> {
        let request = self.request(
            Method::POST,
            &["checkout_sessions", resource_id(session_id)?, "expire"],
        )?;
        self.execute("expire_checkout_session", request).await
    }

    async fn create_plan(&self, plan: &NewPricingPlan) -> Result<Value, GatewayError> {
        let body = Envelope::new(PlanAttributes::from_plan(plan, self.config.plan_cycle_count));
        let request = self.request(Method::POST, &["subscriptions", "plans"])?.json(&body);
        self.execute("create_plan", request).await
    }

    async fn create_webhook(
        &self,
        subscription: &WebhookSubscription,
    ) -> Result<Value, GatewayError> {
        let body = Envelope::new(WebhookAttributes::from(subscription));
        let request = self.request(Method::POST, &["webhooks"])?.json(&body);
        self.execute("create_webhook", request).await
    }

    async fn list_webhooks(&self) -> Result<Value, GatewayError> {
        let request = self.request(Method::GET, &["webhooks"])?;
        self.execute("list_webhooks", request).await
    }

    async fn get_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        let request = self.request(Method::GET, &["webhooks", resource_id(webhook_id)?])?;
        self.execute("get_webhook", request).await
    }

    async fn enable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        let request = self.request(Method::POST, &["webhooks", resource_id(webhook_id)?, "enable"])?;
        self.execute("enable_webhook", request).await
    }

    async fn disable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        let request =
            self.request(Method::POST, &["webhooks", resource_id(webhook_id)?, "disable"])?;
        self.execute("disable_webhook", request).await
    }

    async fn update_webhook(
        &self,
        webhook_id: &str,
        subscription: &WebhookSubscription,
    ) -> Result<Value, GatewayError> {
        let body = Envelope::new(WebhookAttributes::from(subscription));
        let request = self
            .request(Method::PUT, &["webhooks", resource_id(webhook_id)?])?
            .json(&body);
        self.execute("update_webhook", request).await
    }
}
