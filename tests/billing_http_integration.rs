//! Integration tests for the billing HTTP API.
//!
//! The full router runs against the in-memory unit of work, a mock PayMongo
//! gateway and a recording payment sink:
//! 1. Register, log in, and decode the token subject
//! 2. Create plans behind a bearer token; duplicates are refused early
//! 3. Checkout calls are forwarded to the gateway

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use paymongo_billing::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use paymongo_billing::adapters::http::{api_router, AppState};
use paymongo_billing::adapters::memory::InMemoryUnitOfWorkFactory;
use paymongo_billing::adapters::paymongo::MockPaymentGateway;
use paymongo_billing::adapters::payments::RecordingPaymentEventSink;
use paymongo_billing::domain::webhook::WebhookVerifier;
use paymongo_billing::ports::TokenService;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    state: AppState,
    store: InMemoryUnitOfWorkFactory,
    gateway: MockPaymentGateway,
    tokens: Arc<JwtTokenService>,
}

impl Harness {
    fn new() -> Self {
        let store = InMemoryUnitOfWorkFactory::new();
        let gateway = MockPaymentGateway::new();
        let tokens = Arc::new(JwtTokenService::new(
            &SecretString::new("integration-secret".to_string()),
            Duration::from_secs(60 * 60),
        ));
        let state = AppState::new(
            Arc::new(store.clone()),
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
            Arc::new(gateway.clone()),
            WebhookVerifier::new(SecretString::new("whsk_integration".to_string())),
            Arc::new(RecordingPaymentEventSink::new()),
        );
        Self {
            state,
            store,
            gateway,
            tokens,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = api_router(self.state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: Value, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn register_then_login_yields_token_for_email() {
    let h = Harness::new();

    let (status, registered) = h
        .send(form(
            "/api/v1/auth/register",
            "username=buyer%40example.com&password=s3cret",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(registered["user"].get("password_hash").is_none());

    let (status, login) = h
        .send(form(
            "/api/v1/auth/login",
            "username=buyer%40example.com&password=s3cret",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let token = login["access_token"].as_str().unwrap();
    assert_eq!(h.tokens.verify(token).unwrap(), "buyer@example.com");

    let registered_token = registered["token"].as_str().unwrap();
    assert_eq!(h.tokens.verify(registered_token).unwrap(), "buyer@example.com");
}

#[tokio::test]
async fn login_for_unknown_email_is_401() {
    let h = Harness::new();

    let (status, body) = h
        .send(form("/api/v1/auth/login", "username=ghost%40example.com&password=x"))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"detail": "Incorrect email or password"}));
}

#[tokio::test]
async fn expired_token_cannot_create_plans() {
    let h = Harness::new();
    let expired = h.tokens.issue_at("admin@example.com", 1_000).unwrap();

    let (status, _) = h
        .send(json_post(
            "/api/v1/plan/create",
            json!({"name": "Basic", "price": 99.0}),
            Some(expired.as_str()),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(h.gateway.total_calls(), 0);
}

// =============================================================================
// Plans
// =============================================================================

#[tokio::test]
async fn duplicate_plan_is_refused_without_write_or_gateway_call() {
    let h = Harness::new();
    let token = h.tokens.issue("admin@example.com").unwrap();

    let (status, _) = h
        .send(json_post(
            "/api/v1/plan/create",
            json!({"name": "Team", "price": 499.0, "max_users": 5}),
            Some(token.as_str()),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = h
        .send(json_post(
            "/api/v1/plan/create",
            json!({"name": "Team", "price": 599.0}),
            Some(token.as_str()),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Pricing plan with this name already exists"}));
    assert_eq!(h.store.plan_count().await, 1);
    assert_eq!(h.gateway.call_count("create_plan"), 1);
}

#[tokio::test]
async fn invalid_plan_is_400_before_gateway() {
    let h = Harness::new();
    let token = h.tokens.issue("admin@example.com").unwrap();

    let (status, _) = h
        .send(json_post(
            "/api/v1/plan/create",
            json!({"name": "Free", "price": 0.0}),
            Some(token.as_str()),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(h.gateway.total_calls(), 0);
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn checkout_amount_is_sent_in_centavos() {
    let h = Harness::new();

    let (status, body) = h
        .send(json_post(
            "/api/v1/checkout/create",
            json!({"amount": 49.99, "name": "Starter"}),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Checkout session created successfully");
    assert_eq!(h.gateway.calls()[0].args[0], "4999");
}
