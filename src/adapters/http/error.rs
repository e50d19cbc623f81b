//! API error type shared by every route.
//!
//! All failures render as `{"detail": ...}`. Gateway failures keep the
//! upstream status and embed the upstream body:
//!
//! ```json
//! {"detail": {"error": "Bad Request", "response": {"errors": [...]}}}
//! ```

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::application::handlers::{LoginUserError, RegisterUserError};
use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::{AuthError, DomainError, ValidationError};
use crate::domain::gateway::GatewayError;
use crate::domain::plan::PlanError;
use crate::domain::webhook::WebhookError;

/// Error returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A client error with a plain message.
    Detail { status: StatusCode, detail: String },

    /// 401 with a `WWW-Authenticate: Bearer` challenge.
    Unauthorized(String),

    /// Non-2xx answer from the payment gateway, passed through.
    Upstream { status: u16, body: Value },

    /// Anything the caller cannot fix. The message is logged, not returned.
    Internal(String),
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::Detail {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::Detail {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ApiError::Unauthorized(detail.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Detail { status, .. } => *status,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Detail { detail, .. } => {
                (status, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Unauthorized(detail) => (
                status,
                [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                Json(json!({ "detail": detail })),
            )
                .into_response(),
            ApiError::Upstream { body, .. } => {
                let reason = status.canonical_reason().unwrap_or("Upstream error");
                (
                    status,
                    Json(json!({ "detail": { "error": reason, "response": body } })),
                )
                    .into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                (status, Json(json!({ "detail": "Internal server error" }))).into_response()
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversions
// ════════════════════════════════════════════════════════════════════════════════

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream { status, body } => ApiError::Upstream { status, body },
            GatewayError::Transport(_) | GatewayError::Decode(_) => {
                tracing::error!(error = %err, "Payment gateway unreachable");
                ApiError::Detail {
                    status: StatusCode::BAD_GATEWAY,
                    detail: err.to_string(),
                }
            }
            GatewayError::InvalidResourceId(_) => ApiError::bad_request(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken | AuthError::InvalidCredentials => {
                ApiError::unauthorized(err.to_string())
            }
            AuthError::IssuanceFailed(msg) => ApiError::internal(msg),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<RegisterUserError> for ApiError {
    fn from(err: RegisterUserError) -> Self {
        match err {
            RegisterUserError::EmailAlreadyRegistered => ApiError::bad_request(err.to_string()),
            RegisterUserError::Validation(e) => e.into(),
            RegisterUserError::Token(e) => e.into(),
            RegisterUserError::Infrastructure(msg) => ApiError::internal(msg),
        }
    }
}

impl From<LoginUserError> for ApiError {
    fn from(err: LoginUserError) -> Self {
        match err {
            LoginUserError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            LoginUserError::Token(e) => e.into(),
            LoginUserError::Infrastructure(msg) => ApiError::internal(msg),
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::AlreadyExists(_) => ApiError::bad_request(err.to_string()),
            PlanError::NotFound(_) => ApiError::not_found(err.to_string()),
            PlanError::Validation(e) => e.into(),
            PlanError::Gateway(e) => e.into(),
            PlanError::Infrastructure(msg) => ApiError::internal(msg),
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Validation(e) => e.into(),
            CheckoutError::Gateway(e) => e.into(),
        }
    }
}

impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        if err.is_rejection() {
            ApiError::Detail {
                status: err.status_code(),
                detail: err.to_string(),
            }
        } else {
            ApiError::internal(err.to_string())
        }
    }
}
