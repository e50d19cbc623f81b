//! Mock payment gateway for testing.
//!
//! Provides a configurable implementation of `PaymentGateway` for unit and
//! integration tests. Supports:
//! - Canned or pre-configured responses
//! - Error injection
//! - Call tracking
//! - The real client's resource id check, applied before a call is recorded

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::checkout::CheckoutOrder;
use crate::domain::gateway::{resource_id, GatewayError};
use crate::domain::plan::NewPricingPlan;
use crate::ports::{PaymentGateway, WebhookSubscription};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.set_method_error("create_plan", GatewayError::upstream(400, json!({})));
///
/// let result = mock.create_plan(&plan).await;
/// assert_eq!(mock.call_count("create_plan"), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses by method name; a canned body is used when absent.
    responses: HashMap<String, Value>,

    /// Error to return on next call.
    next_error: Option<GatewayError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, GatewayError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the body returned by `method`.
    pub fn set_response(&self, method: &str, body: Value) {
        self.state().responses.insert(method.to_string(), body);
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: GatewayError) {
        self.state().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: GatewayError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    /// Number of calls to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Total number of gateway calls.
    pub fn total_calls(&self) -> usize {
        self.state().call_log.len()
    }

    fn respond(&self, method: &str, args: Vec<String>, canned: Value) -> Result<Value, GatewayError> {
        let mut state = self.state();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });

        if let Some(err) = state.next_error.take() {
            return Err(err);
        }
        if let Some(err) = state.method_errors.get(method) {
            return Err(err.clone());
        }
        Ok(state.responses.get(method).cloned().unwrap_or(canned))
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_checkout_session(&self, order: &CheckoutOrder) -> Result<Value, GatewayError> {
        self.respond(
            "create_checkout_session",
            vec![order.amount_in_centavos().to_string(), order.quantity.to_string()],
            json!({"data": {
                "id": "cs_mock_123",
                "type": "checkout_session",
                "attributes": {
                    "checkout_url": "https://checkout.paymongo.com/cs_mock_123",
                    "status": "active"
                }
            }}),
        )
    }

    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError> {
        resource_id(session_id)?;
        self.respond(
            "retrieve_checkout_session",
            vec![session_id.to_string()],
            json!({"data": {"id": session_id, "type": "checkout_session", "attributes": {"status": "active"}}}),
        )
    }

    async fn expire_checkout_session(&self, session_id: &str) -> Result<Value, GatewayError> {
        resource_id(session_id)?;
        self.respond(
            "expire_checkout_session",
            vec![session_id.to_string()],
            json!({"data": {"id": session_id, "type": "checkout_session", "attributes": {"status": "expired"}}}),
        )
    }

    async fn create_plan(&self, plan: &NewPricingPlan) -> Result<Value, GatewayError> {
        self.respond(
            "create_plan",
            vec![plan.name.clone(), plan.price_in_centavos().to_string()],
            json!({"data": {"id": "plan_mock_123", "type": "plan", "attributes": {"name": plan.name}}}),
        )
    }

    async fn create_webhook(
        &self,
        subscription: &WebhookSubscription,
    ) -> Result<Value, GatewayError> {
        self.respond(
            "create_webhook",
            vec![subscription.url.clone()],
            json!({"data": {"id": "hook_mock_123", "type": "webhook", "attributes": {
                "url": subscription.url,
                "events": subscription.events,
                "status": "enabled"
            }}}),
        )
    }

    async fn list_webhooks(&self) -> Result<Value, GatewayError> {
        self.respond("list_webhooks", Vec::new(), json!({"data": []}))
    }

    async fn get_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        resource_id(webhook_id)?;
        self.respond(
            "get_webhook",
            vec![webhook_id.to_string()],
            json!({"data": {"id": webhook_id, "type": "webhook"}}),
        )
    }

    async fn enable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        resource_id(webhook_id)?;
        self.respond(
            "enable_webhook",
            vec![webhook_id.to_string()],
            json!({"data": {"id": webhook_id, "type": "webhook", "attributes": {"status": "enabled"}}}),
        )
    }

    async fn disable_webhook(&self, webhook_id: &str) -> Result<Value, GatewayError> {
        resource_id(webhook_id)?;
        self.respond(
            "disable_webhook",
            vec![webhook_id.to_string()],
            json!({"data": {"id": webhook_id, "type": "webhook", "attributes": {"status": "disabled"}}}),
        )
    }

    async fn update_webhook(
        &self,
        webhook_id: &str,
        subscription: &WebhookSubscription,
    ) -> Result<Value, GatewayError> {
        resource_id(webhook_id)?;
        self.respond(
            "update_webhook",
            vec![webhook_id.to_string(), subscription.url.clone()],
            json!({"data": {"id": webhook_id, "type": "webhook", "attributes": {
                "url": subscription.url,
                "events": subscription.events
            }}}),
        )
    }
}
