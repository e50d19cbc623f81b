//! Request/response bodies for webhook endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::WebhookSubscription;

/// Body of the webhook subscription create/update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSubscriptionRequest {
    pub url: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl From<WebhookSubscriptionRequest> for WebhookSubscription {
    fn from(req: WebhookSubscriptionRequest) -> Self {
        WebhookSubscription {
            url: req.url,
            events: req.events,
        }
    }
}

/// Acknowledgement sent for every verified delivery.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAckResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl WebhookAckResponse {
    pub fn received() -> Self {
        Self {
            message: "Webhook received successfully",
            status: "success",
        }
    }
}
