//! HTTP adapter for hosted checkout sessions.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateCheckoutRequest, GatewayMessageResponse};
pub use routes::checkout_routes;
