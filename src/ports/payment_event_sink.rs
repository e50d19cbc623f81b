//! Payment event sink port.
//!
//! Receives the side effect of a verified payment webhook. Deliveries are
//! not deduplicated before they reach the sink, so implementations must
//! tolerate the same payment arriving more than once.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::webhook::PaymentDetails;

/// Where verified payment outcomes go (persist, notify, log).
#[async_trait]
pub trait PaymentEventSink: Send + Sync {
    /// A payment succeeded.
    async fn payment_paid(&self, payment: &PaymentDetails) -> Result<(), DomainError>;

    /// A payment attempt failed.
    async fn payment_failed(&self, payment: &PaymentDetails) -> Result<(), DomainError>;
}
