//! HTTP adapter for gateway webhooks.

mod dto;
mod handlers;
mod routes;

pub use dto::{WebhookAckResponse, WebhookSubscriptionRequest};
pub use routes::webhook_routes;
