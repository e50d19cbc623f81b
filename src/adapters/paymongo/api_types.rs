//! PayMongo request bodies.
//!
//! Every PayMongo write wraps its fields as `{"data": {"attributes": {...}}}`.
//! Responses are passed through as raw JSON and are not modelled here.

use serde::Serialize;

use crate::domain::checkout::{generate_reference_number, CheckoutOrder, PAYMENT_METHOD_TYPES};
use crate::domain::gateway::CURRENCY;
use crate::domain::plan::NewPricingPlan;
use crate::ports::WebhookSubscription;

/// Plans bill once per `interval_count` months.
pub const PLAN_INTERVAL: &str = "monthly";

/// `{"data": {"attributes": T}}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: AttributesWrapper<T>,
}

#[derive(Debug, Serialize)]
pub struct AttributesWrapper<T> {
    pub attributes: T,
}

impl<T> Envelope<T> {
    pub fn new(attributes: T) -> Self {
        Self {
            data: AttributesWrapper { attributes },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutSessionAttributes {
    pub send_email_receipt: bool,
    pub show_description: bool,
    pub show_line_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub line_items: Vec<LineItem>,
    pub payment_method_types: Vec<&'static str>,
    pub reference_number: String,
    pub success_url: String,
    pub cancel_url: String,
    pub statement_descriptor: String,
}

#[derive(Debug, Serialize)]
pub struct LineItem {
    pub currency: &'static str,
    /// Unit amount in centavos.
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    pub quantity: u32,
}

/// Fixed checkout settings taken from configuration.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    pub success_url: String,
    pub cancel_url: String,
    pub statement_descriptor: String,
}

impl CheckoutSessionAttributes {
    pub fn from_order(order: &CheckoutOrder, settings: &CheckoutSettings) -> Self {
        Self {
            send_email_receipt: false,
            show_description: true,
            show_line_items: true,
            description: order.description.clone(),
            line_items: vec![LineItem {
                currency: CURRENCY,
                amount: order.amount_in_centavos(),
                description: order.description.clone(),
                name: order.name.clone(),
                quantity: order.quantity,
            }],
            payment_method_types: PAYMENT_METHOD_TYPES.to_vec(),
            reference_number: generate_reference_number(),
            success_url: settings.success_url.clone(),
            cancel_url: settings.cancel_url.clone(),
            statement_descriptor: settings.statement_descriptor.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanAttributes {
    pub amount: i64,
    pub currency: &'static str,
    pub interval: &'static str,
    pub interval_count: i32,
    pub cycle_count: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlanAttributes {
    pub fn from_plan(plan: &NewPricingPlan, cycle_count: u32) -> Self {
        Self {
            amount: plan.price_in_centavos(),
            currency: CURRENCY,
            interval: PLAN_INTERVAL,
            interval_count: plan.billing_cycle,
            cycle_count,
            name: plan.name.clone(),
            description: plan.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookAttributes<'a> {
    pub url: &'a str,
    pub events: &'a [String],
}

impl<'a> From<&'a WebhookSubscription> for WebhookAttributes<'a> {
    fn from(sub: &'a WebhookSubscription) -> Self {
        Self {
            url: &sub.url,
            events: &sub.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanDraft;
    use serde_json::json;

    fn settings() -> CheckoutSettings {
        CheckoutSettings {
            success_url: "https://example.com/success".to_string(),
            cancel_url: "https://example.com/cancel".to_string(),
            statement_descriptor: "Test Payment".to_string(),
        }
    }

    #[test]
    fn checkout_body_has_single_php_line_item() {
        let order = CheckoutOrder::new(50.0, Some("Coffee".to_string()), Some(2), None).unwrap();
        let body = serde_json::to_value(Envelope::new(CheckoutSessionAttributes::from_order(
            &order,
            &settings(),
        )))
        .unwrap();

        let attrs = &body["data"]["attributes"];
        assert_eq!(
            attrs["line_items"],
            json!([{
                "currency": "PHP",
                "amount": 5000,
                "description": "Coffee",
                "name": "Sample Item",
                "quantity": 2
            }])
        );
        assert_eq!(
            attrs["payment_method_types"],
            json!(["gcash", "paymaya", "grab_pay", "card", "qrph"])
        );
        assert_eq!(attrs["send_email_receipt"], json!(false));
        assert_eq!(attrs["show_description"], json!(true));
        assert_eq!(attrs["statement_descriptor"], json!("Test Payment"));
        assert!(attrs["reference_number"]
            .as_str()
            .unwrap()
            .starts_with("Ref-"));
    }

    #[test]
    fn checkout_body_omits_missing_description() {
        let order = CheckoutOrder::new(10.0, None, None, None).unwrap();
        let body = serde_json::to_value(CheckoutSessionAttributes::from_order(&order, &settings()))
            .unwrap();

        assert!(body.get("description").is_none());
        assert!(body["line_items"][0].get("description").is_none());
    }

    #[test]
    fn plan_body_uses_monthly_interval() {
        let plan = NewPricingPlan::from_draft(PlanDraft {
            name: "Pro".to_string(),
            price: 299.5,
            billing_cycle: Some(3),
            ..Default::default()
        })
        .unwrap();
        let body = serde_json::to_value(Envelope::new(PlanAttributes::from_plan(&plan, 12))).unwrap();

        assert_eq!(
            body,
            json!({"data": {"attributes": {
                "amount": 29950,
                "currency": "PHP",
                "interval": "monthly",
                "interval_count": 3,
                "cycle_count": 12,
                "name": "Pro"
            }}})
        );
    }

    #[test]
    fn webhook_body_wraps_url_and_events() {
        let sub = WebhookSubscription {
            url: "https://example.com/hook".to_string(),
            events: vec!["payment.paid".to_string()],
        };
        let body = serde_json::to_value(Envelope::new(WebhookAttributes::from(&sub))).unwrap();

        assert_eq!(
            body,
            json!({"data": {"attributes": {
                "url": "https://example.com/hook",
                "events": ["payment.paid"]
            }}})
        );
    }
}
