//! HTTP handlers for webhook endpoints.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::application::handlers::ReceivePaymentWebhookCommand;
use crate::domain::webhook::SIGNATURE_HEADER;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{WebhookAckResponse, WebhookSubscriptionRequest};

/// POST /webhooks/payment-webhooks - Signed delivery from the gateway
///
/// Takes the body as raw bytes; the signature is checked before any parsing.
pub async fn receive_payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAckResponse>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .receive_webhook_handler()
        .handle(ReceivePaymentWebhookCommand {
            payload: body.to_vec(),
            signature,
        })
        .await?;

    Ok(Json(WebhookAckResponse::received()))
}

/// POST /webhooks/webhook-event - Register a webhook endpoint with the gateway
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<WebhookSubscriptionRequest>,
) -> Result<Json<Value>, ApiError> {
    let response = state
        .webhook_subscriptions_handler()
        .create(request.into())
        .await?;
    Ok(Json(response))
}

/// GET /webhooks/webhook-event
pub async fn list_subscriptions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.webhook_subscriptions_handler().list().await?))
}

/// GET /webhooks/webhook-event/:id
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(
        state.webhook_subscriptions_handler().get(&webhook_id).await?,
    ))
}

/// PUT /webhooks/webhook-event/:id
pub async fn update_subscription(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
    Json(request): Json<WebhookSubscriptionRequest>,
) -> Result<Json<Value>, ApiError> {
    let response = state
        .webhook_subscriptions_handler()
        .update(&webhook_id, request.into())
        .await?;
    Ok(Json(response))
}

/// POST /webhooks/webhook-event/:id/enable
pub async fn enable_subscription(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(
        state
            .webhook_subscriptions_handler()
            .enable(&webhook_id)
            .await?,
    ))
}

/// POST /webhooks/webhook-event/:id/disable
pub async fn disable_subscription(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(
        state
            .webhook_subscriptions_handler()
            .disable(&webhook_id)
            .await?,
    ))
}
