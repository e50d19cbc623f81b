//! ReceivePaymentWebhookHandler - verifies and dispatches gateway deliveries.

use std::sync::Arc;

use crate::domain::webhook::{GatewayEvent, WebhookAction, WebhookError, WebhookVerifier};
use crate::ports::PaymentEventSink;

/// Command carrying one webhook delivery.
#[derive(Debug, Clone)]
pub struct ReceivePaymentWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,
    /// Signature header value, if any.
    pub signature: Option<String>,
}

/// Result of a verified delivery. Every variant is acknowledged with 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivePaymentWebhookResult {
    /// `payment.paid` handed to the sink.
    PaymentRecorded { payment_id: String },
    /// `payment.failed` handed to the sink.
    PaymentFailureRecorded { payment_id: String },
    /// The sink failed; logged and acknowledged anyway.
    ProcessingFailed { event_type: String, reason: String },
    /// Event type with no side effect.
    Ignored { event_type: String },
}

/// Handler for inbound payment webhooks.
///
/// The signature is checked over the raw bytes before anything is parsed.
/// Only signature and payload problems are errors; once a delivery is
/// verified, sink failures are reported in the result instead.
pub struct ReceivePaymentWebhookHandler {
    verifier: Arc<WebhookVerifier>,
    sink: Arc<dyn PaymentEventSink>,
}

impl ReceivePaymentWebhookHandler {
    pub fn new(verifier: Arc<WebhookVerifier>, sink: Arc<dyn PaymentEventSink>) -> Self {
        Self { verifier, sink }
    }

    pub async fn handle(
        &self,
        cmd: ReceivePaymentWebhookCommand,
    ) -> Result<ReceivePaymentWebhookResult, WebhookError> {
        // 1. Authenticate the raw body
        if let Err(err) = self.verifier.verify(&cmd.payload, cmd.signature.as_deref()) {
            tracing::warn!(error = %err, "Webhook rejected");
            return Err(err);
        }

        // 2. Parse and decide
        let event = GatewayEvent::parse(&cmd.payload)?;
        let event_type = event.event_type();
        tracing::info!(
            event_id = event.event_id().unwrap_or_default(),
            event_type = event_type.as_str(),
            livemode = event.is_live(),
            "Webhook verified"
        );
        let action = event.action()?;

        // 3. Side effect
        match self.dispatch(action).await {
            Ok(result) => Ok(result),
            Err(WebhookError::Downstream(reason)) => {
                tracing::error!(
                    event_type = event_type.as_str(),
                    error = %reason,
                    "Webhook side effect failed"
                );
                Ok(ReceivePaymentWebhookResult::ProcessingFailed {
                    event_type: event_type.as_str().to_string(),
                    reason,
                })
            }
            Err(other) => Err(other),
        }
    }

    async fn dispatch(
        &self,
        action: WebhookAction,
    ) -> Result<ReceivePaymentWebhookResult, WebhookError> {
        match action {
            WebhookAction::PaymentPaid(payment) => {
                self.sink
                    .payment_paid(&payment)
                    .await
                    .map_err(|e| WebhookError::Downstream(e.to_string()))?;
                Ok(ReceivePaymentWebhookResult::PaymentRecorded {
                    payment_id: payment.payment_id,
                })
            }
            WebhookAction::PaymentFailed(payment) => {
                self.sink
                    .payment_failed(&payment)
                    .await
                    .map_err(|e| WebhookError::Downstream(e.to_string()))?;
                Ok(ReceivePaymentWebhookResult::PaymentFailureRecorded {
                    payment_id: payment.payment_id,
                })
            }
            WebhookAction::Ignore(event_type) => {
                tracing::debug!(event_type = %event_type, "Webhook event ignored");
                Ok(ReceivePaymentWebhookResult::Ignored { event_type })
            }
        }
    }
}
