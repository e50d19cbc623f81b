//! Axum router for auth endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::{auth_middleware, AuthState};
use super::super::state::AppState;
use super::handlers::{login, me, register};

/// # Routes
/// - `POST /login` - form login
/// - `POST /register` - form registration
/// - `GET /me` - requires a bearer token
pub fn auth_routes(auth: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .merge(protected)
}
