//! PayMongo payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the PayMongo REST API:
//! - Checkout sessions (create, retrieve, expire)
//! - Subscription plans
//! - Webhook endpoint registration
//!
//! Secrets are handled via `secrecy::SecretString`.

mod api_types;
mod client;
mod mock_gateway;

pub use client::{PayMongoClient, PayMongoConfig};
pub use mock_gateway::{MethodCall, MockPaymentGateway};
