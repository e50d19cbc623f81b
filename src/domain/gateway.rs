//! Payment gateway failure vocabulary.
//!
//! Handlers that call the gateway surface these unchanged so the HTTP layer
//! can pass upstream status codes and bodies through verbatim.

use serde_json::Value;
use thiserror::Error;

/// Currency every gateway amount is denominated in.
pub const CURRENCY: &str = "PHP";

/// Converts a major-unit amount (pesos) to minor units (centavos).
pub fn to_centavos(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Failure talking to the payment gateway.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Gateway answered with a non-2xx status.
    #[error("Payment gateway returned HTTP {status}")]
    Upstream { status: u16, body: Value },

    /// Request never produced a response (DNS, TLS, connection reset).
    #[error("Payment gateway unreachable: {0}")]
    Transport(String),

    /// 2xx response whose body was not JSON.
    #[error("Unreadable payment gateway response: {0}")]
    Decode(String),

    /// Caller-supplied resource id that cannot name a gateway object.
    #[error("Invalid resource id: {0}")]
    InvalidResourceId(String),
}

impl GatewayError {
    pub fn upstream(status: u16, body: Value) -> Self {
        GatewayError::Upstream { status, body }
    }

    /// HTTP status to answer the caller with.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::Transport(_) | GatewayError::Decode(_) => 502,
            GatewayError::InvalidResourceId(_) => 400,
        }
    }
}

/// Checks that `id` is a single gateway object id such as `cs_9f2a` or
/// `hook_Ab12`: ASCII letters, digits and underscores only.
pub fn resource_id(id: &str) -> Result<&str, GatewayError> {
    let valid = !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if !valid {
        return Err(GatewayError::InvalidResourceId(id.to_string()));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn centavos_rounds_to_nearest() {
        assert_eq!(to_centavos(50.0), 5000);
        assert_eq!(to_centavos(19.99), 1999);
        assert_eq!(to_centavos(0.1), 10);
        assert_eq!(to_centavos(2.5), 250);
    }

    #[test]
    fn upstream_status_passes_through() {
        let err = GatewayError::upstream(422, json!({"errors": []}));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn transport_and_decode_are_bad_gateway() {
        assert_eq!(GatewayError::Transport("reset".into()).status_code(), 502);
        assert_eq!(GatewayError::Decode("eof".into()).status_code(), 502);
    }

    #[test]
    fn gateway_ids_are_accepted() {
        assert_eq!(resource_id("cs_4dd8e6c3b2"), Ok("cs_4dd8e6c3b2"));
        assert_eq!(resource_id("hook_Ab12"), Ok("hook_Ab12"));
    }

    #[test]
    fn path_like_ids_are_rejected() {
        for id in ["", "..", ".", "../webhooks", "cs_1/expire", "cs_1?x=1", "cs_1#f", "cs 1", "cs%2F1"] {
            assert_eq!(
                resource_id(id),
                Err(GatewayError::InvalidResourceId(id.to_string())),
                "{id:?} should be rejected"
            );
            assert_eq!(GatewayError::InvalidResourceId(id.to_string()).status_code(), 400);
        }
    }
}
