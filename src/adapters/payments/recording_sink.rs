//! Recording payment event sink for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::webhook::PaymentDetails;
use crate::ports::PaymentEventSink;

/// Which sink operation was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Paid,
    Failed,
}

/// Records every invocation; can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingPaymentEventSink {
    calls: Arc<Mutex<Vec<(PaymentOutcome, PaymentDetails)>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingPaymentEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call returns a database error.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.fail.store(true, Ordering::SeqCst);
        sink
    }

    pub fn calls(&self) -> Vec<(PaymentOutcome, PaymentDetails)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn record(&self, outcome: PaymentOutcome, payment: &PaymentDetails) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((outcome, payment.clone()));

        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("sink unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentEventSink for RecordingPaymentEventSink {
    async fn payment_paid(&self, payment: &PaymentDetails) -> Result<(), DomainError> {
        self.record(PaymentOutcome::Paid, payment)
    }

    async fn payment_failed(&self, payment: &PaymentDetails) -> Result<(), DomainError> {
        self.record(PaymentOutcome::Failed, payment)
    }
}
