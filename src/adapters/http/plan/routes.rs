//! Axum router for pricing plan endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::{auth_middleware, AuthState};
use super::super::state::AppState;
use super::handlers::{create_plan, get_plan, list_plans};

/// # Routes
/// - `POST /create` - requires a bearer token
/// - `GET /` - list plans
/// - `GET /:id` - one plan
pub fn plan_routes(auth: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/create", post(create_plan))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/", get(list_plans))
        .route("/:id", get(get_plan))
        .merge(protected)
}
