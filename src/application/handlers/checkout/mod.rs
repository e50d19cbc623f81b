//! Checkout handlers.
//!
//! Thin wrappers over the gateway's hosted checkout; nothing is stored locally.

mod checkout_session;
mod create_checkout;

pub use checkout_session::{ExpireCheckoutHandler, RetrieveCheckoutHandler};
pub use create_checkout::{CreateCheckoutCommand, CreateCheckoutHandler};
