//! Webhook module - inbound PayMongo deliveries.
//!
//! A delivery is verified against its signature on the raw bytes, then parsed
//! into a [`GatewayEvent`] and turned into a [`WebhookAction`].

mod errors;
mod event;
mod verifier;

pub use errors::WebhookError;
pub use event::{
    GatewayEvent, GatewayEventAttributes, GatewayEventData, GatewayEventType, PaymentDetails,
    WebhookAction,
};
pub use verifier::{WebhookVerifier, SIGNATURE_HEADER};

#[cfg(test)]
pub use event::PaymentEventBuilder;
