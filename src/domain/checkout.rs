//! Checkout orders.
//!
//! A checkout order is a single line item handed to the gateway's hosted
//! checkout page.

use thiserror::Error;
use uuid::Uuid;

use super::foundation::ValidationError;
use super::gateway::{to_centavos, GatewayError};

pub const DEFAULT_ITEM_NAME: &str = "Sample Item";

/// Payment methods offered on every checkout page.
pub const PAYMENT_METHOD_TYPES: [&str; 5] = ["gcash", "paymaya", "grab_pay", "card", "qrph"];

/// A validated single-item checkout order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    pub amount: f64,
    pub description: Option<String>,
    pub quantity: u32,
    pub name: String,
}

impl CheckoutOrder {
    pub fn new(
        amount: f64,
        description: Option<String>,
        quantity: Option<u32>,
        name: Option<String>,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::not_positive("amount"));
        }
        let quantity = quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(ValidationError::below_minimum("quantity", 1, 0));
        }
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string());

        Ok(Self {
            amount,
            description,
            quantity,
            name,
        })
    }

    /// Unit amount in centavos.
    pub fn amount_in_centavos(&self) -> i64 {
        to_centavos(self.amount)
    }
}

/// Merchant reference attached to a checkout session: `Ref-` plus ten hex digits.
pub fn generate_reference_number() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("Ref-{}", &hex[..10])
}

/// Checkout errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CheckoutError {
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Validation(_) => 400,
            CheckoutError::Gateway(err) => err.status_code(),
        }
    }
}
