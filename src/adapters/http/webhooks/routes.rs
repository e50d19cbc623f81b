//! Axum router for webhook endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    create_subscription, disable_subscription, enable_subscription, get_subscription,
    list_subscriptions, receive_payment_webhook, update_subscription,
};

/// # Routes
///
/// ## Deliveries (no auth, signature verified)
/// - `POST /payment-webhooks`
///
/// ## Subscription management (proxied to the gateway)
/// - `POST /webhook-event`, `GET /webhook-event`
/// - `GET /webhook-event/:id`, `PUT /webhook-event/:id`
/// - `POST /webhook-event/:id/enable`, `POST /webhook-event/:id/disable`
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/payment-webhooks", post(receive_payment_webhook))
        .route(
            "/webhook-event",
            post(create_subscription).get(list_subscriptions),
        )
        .route(
            "/webhook-event/:id",
            get(get_subscription).put(update_subscription),
        )
        .route("/webhook-event/:id/enable", post(enable_subscription))
        .route("/webhook-event/:id/disable", post(disable_subscription))
}
