//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod checkout;
pub mod plan;
pub mod webhook;

pub use auth::{
    LoginUserCommand, LoginUserError, LoginUserHandler, RegisterUserCommand, RegisterUserError,
    RegisterUserHandler, RegisterUserResult,
};
pub use checkout::{
    CreateCheckoutCommand, CreateCheckoutHandler, ExpireCheckoutHandler, RetrieveCheckoutHandler,
};
pub use plan::{CreatePlanCommand, CreatePlanHandler, GetPlanHandler, GetPlanQuery, ListPlansHandler};
pub use webhook::{
    ReceivePaymentWebhookCommand, ReceivePaymentWebhookHandler, ReceivePaymentWebhookResult,
    WebhookSubscriptionsHandler,
};
