//! Request/response bodies for checkout endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /checkout/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Unit price in pesos.
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A confirmation message wrapped around the gateway's response.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayMessageResponse {
    pub message: &'static str,
    pub response: Value,
}
