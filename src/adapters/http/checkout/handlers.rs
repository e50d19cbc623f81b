//! HTTP handlers for checkout endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::application::handlers::CreateCheckoutCommand;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{CreateCheckoutRequest, GatewayMessageResponse};

/// POST /checkout/create - Open a hosted checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<GatewayMessageResponse>, ApiError> {
    let response = state
        .create_checkout_handler()
        .handle(CreateCheckoutCommand {
            amount: request.amount,
            description: request.description,
            quantity: request.quantity,
            name: request.name,
        })
        .await?;

    Ok(Json(GatewayMessageResponse {
        message: "Checkout session created successfully",
        response,
    }))
}

/// GET /checkout/retrieve/:id - The session as the gateway reports it
pub async fn retrieve_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let session = state
        .retrieve_checkout_handler()
        .handle(&session_id)
        .await?;
    Ok(Json(session))
}

/// POST /checkout/expire/:id - Expire an open session
pub async fn expire_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GatewayMessageResponse>, ApiError> {
    let response = state.expire_checkout_handler().handle(&session_id).await?;

    Ok(Json(GatewayMessageResponse {
        message: "Checkout session expired successfully",
        response,
    }))
}
