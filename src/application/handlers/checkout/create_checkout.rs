//! CreateCheckoutHandler - opens a hosted checkout session for one item.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::checkout::{CheckoutError, CheckoutOrder};
use crate::ports::PaymentGateway;

/// Command to open a checkout session.
#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    /// Unit price in pesos.
    pub amount: f64,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub name: Option<String>,
}

pub struct CreateCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateCheckoutHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the gateway's checkout session resource unchanged.
    pub async fn handle(&self, cmd: CreateCheckoutCommand) -> Result<Value, CheckoutError> {
        let order = CheckoutOrder::new(cmd.amount, cmd.description, cmd.quantity, cmd.name)?;

        let session = self.gateway.create_checkout_session(&order).await?;

        let session_id = session
            .pointer("/data/id")
            .and_then(|id| id.as_str())
            .unwrap_or_default();
        tracing::info!(
            session_id,
            amount_centavos = order.amount_in_centavos(),
            quantity = order.quantity,
            "Checkout session created"
        );

        Ok(session)
    }
}
