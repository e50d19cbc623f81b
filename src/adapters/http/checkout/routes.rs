//! Axum router for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{create_checkout, expire_checkout, retrieve_checkout};

/// # Routes
/// - `POST /create`
/// - `GET /retrieve/:id`
/// - `POST /expire/:id`
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_checkout))
        .route("/retrieve/:id", get(retrieve_checkout))
        .route("/expire/:id", post(expire_checkout))
}
