//! Default payment event sink: structured log lines only.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::webhook::PaymentDetails;
use crate::ports::PaymentEventSink;

/// Logs each verified payment outcome. Safe to receive duplicates.
#[derive(Debug, Default, Clone)]
pub struct LoggingPaymentEventSink;

impl LoggingPaymentEventSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentEventSink for LoggingPaymentEventSink {
    async fn payment_paid(&self, payment: &PaymentDetails) -> Result<(), DomainError> {
        tracing::info!(
            payment_id = %payment.payment_id,
            amount = payment.amount,
            status = %payment.status,
            customer_email = payment.customer_email.as_deref().unwrap_or("unknown"),
            "Payment received"
        );
        Ok(())
    }

    async fn payment_failed(&self, payment: &PaymentDetails) -> Result<(), DomainError> {
        tracing::warn!(
            payment_id = %payment.payment_id,
            amount = payment.amount,
            status = %payment.status,
            customer_email = payment.customer_email.as_deref().unwrap_or("unknown"),
            "Payment failed"
        );
        Ok(())
    }
}
