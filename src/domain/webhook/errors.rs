//! Webhook error types for PayMongo webhook handling.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur while receiving a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// The `X-PayMongo-Signature` header was absent.
    #[error("Missing signature")]
    MissingSignature,

    /// The signature header did not match the body.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Body is not JSON or lacks a required field.
    #[error("Invalid payload: {0}")]
    MalformedPayload(String),

    /// A side effect failed after the delivery was verified.
    #[error("Downstream processing failed: {0}")]
    Downstream(String),
}

impl WebhookError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        WebhookError::MalformedPayload(reason.into())
    }

    /// Maps the error to the status promised to the gateway.
    ///
    /// Only rejection reasons are 4xx. Once the signature has verified the
    /// delivery is acknowledged even when a side effect fails.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSignature
            | WebhookError::InvalidSignature
            | WebhookError::MalformedPayload(_) => StatusCode::BAD_REQUEST,

            WebhookError::Downstream(_) => StatusCode::OK,
        }
    }

    /// Returns true if the delivery was refused.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, WebhookError::Downstream(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_displays_correctly() {
        assert_eq!(WebhookError::InvalidSignature.to_string(), "Invalid signature");
    }

    #[test]
    fn malformed_payload_includes_reason() {
        let err = WebhookError::malformed("missing field `type`");
        assert_eq!(err.to_string(), "Invalid payload: missing field `type`");
    }

    #[test]
    fn rejections_are_bad_request() {
        assert_eq!(WebhookError::MissingSignature.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(WebhookError::InvalidSignature.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebhookError::malformed("x").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn downstream_failures_are_still_acknowledged() {
        let err = WebhookError::Downstream("db down".into());
        assert_eq!(err.status_code(), StatusCode::OK);
        assert!(!err.is_rejection());
    }
}
