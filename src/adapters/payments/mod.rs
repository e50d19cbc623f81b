//! Payment event sinks.
//!
//! - `LoggingPaymentEventSink` - production default, writes structured logs
//! - `RecordingPaymentEventSink` - captures invocations for assertions

mod logging_sink;
mod recording_sink;

pub use logging_sink::LoggingPaymentEventSink;
pub use recording_sink::{PaymentOutcome, RecordingPaymentEventSink};
