//! PayMongo webhook event types.
//!
//! Only the fields used for dispatch are captured; the rest of the envelope
//! is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::WebhookError;

/// PayMongo event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayEvent {
    pub data: GatewayEventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayEventData {
    /// Event id (evt_xxx).
    #[serde(default)]
    pub id: Option<String>,
    pub attributes: GatewayEventAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayEventAttributes {
    /// Dotted event type, e.g. `payment.paid`.
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub livemode: bool,

    /// Resource the event is about (shape depends on the type).
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct PaymentResource {
    id: String,
    attributes: PaymentAttributes,
}

#[derive(Debug, Deserialize)]
struct PaymentAttributes {
    amount: i64,
    status: String,
    #[serde(default)]
    billing: Option<Billing>,
}

#[derive(Debug, Deserialize)]
struct Billing {
    #[serde(default)]
    email: Option<String>,
}

/// Event types that trigger a side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEventType {
    PaymentPaid,
    PaymentFailed,
    Unknown(String),
}

impl GatewayEventType {
    /// Parse event type from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "payment.paid" => Self::PaymentPaid,
            "payment.failed" => Self::PaymentFailed,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::PaymentPaid => "payment.paid",
            Self::PaymentFailed => "payment.failed",
            Self::Unknown(s) => s,
        }
    }
}

/// Payment fields carried by `payment.*` events. Transient; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentDetails {
    pub payment_id: String,
    /// Amount in centavos.
    pub amount: i64,
    pub status: String,
    pub customer_email: Option<String>,
}

/// What a verified delivery asks us to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookAction {
    PaymentPaid(PaymentDetails),
    PaymentFailed(PaymentDetails),
    /// Acknowledge without side effects.
    Ignore(String),
}

impl GatewayEvent {
    /// Parses a delivery body. Call only after the signature has verified.
    pub fn parse(payload: &[u8]) -> Result<Self, WebhookError> {
        serde_json::from_slice(payload).map_err(|e| WebhookError::malformed(e.to_string()))
    }

    pub fn event_type(&self) -> GatewayEventType {
        GatewayEventType::parse(&self.data.attributes.event_type)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.data.attributes.livemode
    }

    /// Decides the side effect for this event.
    ///
    /// Payment events must carry id, amount and status; a missing billing
    /// email is tolerated.
    pub fn action(&self) -> Result<WebhookAction, WebhookError> {
        match self.event_type() {
            GatewayEventType::PaymentPaid => Ok(WebhookAction::PaymentPaid(self.payment()?)),
            GatewayEventType::PaymentFailed => Ok(WebhookAction::PaymentFailed(self.payment()?)),
            GatewayEventType::Unknown(other) => Ok(WebhookAction::Ignore(other)),
        }
    }

    fn payment(&self) -> Result<PaymentDetails, WebhookError> {
        let resource: PaymentResource = serde_json::from_value(self.data.attributes.data.clone())
            .map_err(|e| WebhookError::malformed(format!("payment data: {}", e)))?;

        Ok(PaymentDetails {
            payment_id: resource.id,
            amount: resource.attributes.amount,
            status: resource.attributes.status,
            customer_email: resource.attributes.billing.and_then(|b| b.email),
        })
    }
}

/// Builder for PayMongo-shaped webhook bodies in tests.
#[cfg(test)]
pub struct PaymentEventBuilder {
    event_type: String,
    payment_id: String,
    amount: i64,
    status: String,
    email: Option<String>,
}

#[cfg(test)]
impl Default for PaymentEventBuilder {
    fn default() -> Self {
        Self {
            event_type: "payment.paid".to_string(),
            payment_id: "pay_1".to_string(),
            amount: 5000,
            status: "paid".to_string(),
            email: Some("a@b.com".to_string()),
        }
    }
}

#[cfg(test)]
impl PaymentEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn payment_id(mut self, id: impl Into<String>) -> Self {
        self.payment_id = id.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn to_json(&self) -> Value {
        let billing = match &self.email {
            Some(email) => serde_json::json!({ "email": email }),
            None => Value::Null,
        };
        serde_json::json!({
            "data": {
                "id": "evt_test_123",
                "type": "event",
                "attributes": {
                    "type": self.event_type,
                    "livemode": false,
                    "data": {
                        "id": self.payment_id,
                        "type": "payment",
                        "attributes": {
                            "amount": self.amount,
                            "status": self.status,
                            "billing": billing
                        }
                    }
                }
            }
        })
    }

    pub fn build_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.to_json()).expect("json value serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ══════════════════════════════════════════════════════════════
    // Envelope Parsing Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parse_payment_paid_event() {
        let event = GatewayEvent::parse(&PaymentEventBuilder::new().build_bytes()).unwrap();

        assert_eq!(event.event_type(), GatewayEventType::PaymentPaid);
        assert_eq!(event.event_id(), Some("evt_test_123"));
        assert!(!event.is_live());
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(matches!(
            GatewayEvent::parse(b"not json"),
            Err(WebhookError::MalformedPayload(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_event_type() {
        let body = json!({"data": {"attributes": {"livemode": false}}}).to_string();
        assert!(GatewayEvent::parse(body.as_bytes()).is_err());
    }

    // ══════════════════════════════════════════════════════════════
    // Dispatch Decision Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn payment_paid_extracts_details() {
        let event = GatewayEvent::parse(&PaymentEventBuilder::new().build_bytes()).unwrap();

        assert_eq!(
            event.action().unwrap(),
            WebhookAction::PaymentPaid(PaymentDetails {
                payment_id: "pay_1".to_string(),
                amount: 5000,
                status: "paid".to_string(),
                customer_email: Some("a@b.com".to_string()),
            })
        );
    }

    #[test]
    fn payment_failed_extracts_details() {
        let body = PaymentEventBuilder::new()
            .event_type("payment.failed")
            .status("failed")
            .build_bytes();
        let event = GatewayEvent::parse(&body).unwrap();

        match event.action().unwrap() {
            WebhookAction::PaymentFailed(details) => assert_eq!(details.status, "failed"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn missing_billing_email_is_tolerated() {
        let body = PaymentEventBuilder::new().email(None).build_bytes();
        let event = GatewayEvent::parse(&body).unwrap();

        match event.action().unwrap() {
            WebhookAction::PaymentPaid(details) => assert_eq!(details.customer_email, None),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn payment_without_amount_is_malformed() {
        let body = json!({
            "data": {"attributes": {
                "type": "payment.paid",
                "data": {"id": "pay_1", "attributes": {"status": "paid"}}
            }}
        })
        .to_string();
        let event = GatewayEvent::parse(body.as_bytes()).unwrap();

        assert!(matches!(
            event.action(),
            Err(WebhookError::MalformedPayload(_))
        ));
    }

    #[test]
    fn unknown_event_is_ignored() {
        let body = json!({
            "data": {"attributes": {"type": "source.chargeable", "data": {}}}
        })
        .to_string();
        let event = GatewayEvent::parse(body.as_bytes()).unwrap();

        assert_eq!(
            event.action().unwrap(),
            WebhookAction::Ignore("source.chargeable".to_string())
        );
    }

    #[test]
    fn unknown_event_needs_no_payment_data() {
        let body = json!({"data": {"attributes": {"type": "checkout_session.payment.paid"}}})
            .to_string();
        let event = GatewayEvent::parse(body.as_bytes()).unwrap();

        assert!(matches!(event.action(), Ok(WebhookAction::Ignore(_))));
    }

    #[test]
    fn event_type_round_trips() {
        for s in ["payment.paid", "payment.failed", "source.chargeable"] {
            assert_eq!(GatewayEventType::parse(s).as_str(), s);
        }
    }
}
