//! Webhook handlers.
//!
//! ## Commands
//! - Receiving signed payment deliveries
//! - Managing the gateway's webhook subscriptions

mod manage_subscriptions;
mod receive_payment_webhook;

pub use manage_subscriptions::WebhookSubscriptionsHandler;
pub use receive_payment_webhook::{
    ReceivePaymentWebhookCommand, ReceivePaymentWebhookHandler, ReceivePaymentWebhookResult,
};
