//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers, and routes. Everything
//! is mounted under `/api/v1`.

pub mod auth;
pub mod checkout;
pub mod error;
pub mod middleware;
pub mod plan;
pub mod state;
pub mod webhooks;

use axum::http::HeaderName;
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the full API router.
///
/// # Routes
/// - `/api/v1/auth/*` - login, registration, current user
/// - `/api/v1/plan/*` - pricing plans
/// - `/api/v1/checkout/*` - hosted checkout sessions
/// - `/api/v1/webhooks/*` - signed deliveries and subscription management
pub fn api_router(state: AppState) -> Router {
    let auth = state.tokens.clone();

    let v1 = Router::new()
        .nest("/auth", auth::auth_routes(auth.clone()))
        .nest("/plan", plan::plan_routes(auth))
        .nest("/checkout", checkout::checkout_routes())
        .nest("/webhooks", webhooks::webhook_routes());

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .nest("/api/v1", v1)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Router wired to in-memory and mock adapters.

    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, Response};
    use secrecy::SecretString;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::{api_router, AppState};
    use crate::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
    use crate::adapters::memory::InMemoryUnitOfWorkFactory;
    use crate::adapters::paymongo::MockPaymentGateway;
    use crate::adapters::payments::RecordingPaymentEventSink;
    use crate::domain::webhook::WebhookVerifier;
    use crate::ports::TokenService;

    pub const WEBHOOK_SECRET: &str = "whsk_router_test";

    pub struct TestApp {
        pub state: AppState,
        pub store: InMemoryUnitOfWorkFactory,
        pub gateway: MockPaymentGateway,
        pub sink: RecordingPaymentEventSink,
        pub tokens: Arc<JwtTokenService>,
        pub verifier: WebhookVerifier,
    }

    impl TestApp {
        pub fn new() -> Self {
            let store = InMemoryUnitOfWorkFactory::new();
            let gateway = MockPaymentGateway::new();
            let sink = RecordingPaymentEventSink::new();
            let tokens = Arc::new(JwtTokenService::new(
                &SecretString::new("router-test-secret".to_string()),
                Duration::from_secs(3600),
            ));
            let verifier = WebhookVerifier::new(SecretString::new(WEBHOOK_SECRET.to_string()));

            let state = AppState::new(
                Arc::new(store.clone()),
                Arc::new(Argon2PasswordHasher::new()),
                tokens.clone(),
                Arc::new(gateway.clone()),
                verifier.clone(),
                Arc::new(sink.clone()),
            );

            Self {
                state,
                store,
                gateway,
                sink,
                tokens,
                verifier,
            }
        }

        pub fn bearer(&self, email: &str) -> String {
            format!("Bearer {}", self.tokens.issue(email).unwrap().as_str())
        }

        pub async fn send(&self, request: Request<Body>) -> Response<Body> {
            api_router(self.state.clone())
                .oneshot(request)
                .await
                .unwrap()
        }
    }

    pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn form_request(uri: &str, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
