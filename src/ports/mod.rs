//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UnitOfWorkFactory` / `UnitOfWork` - per-request transaction
//! - `UserRepository` - credential store
//! - `PlanRepository` - pricing plans
//!
//! ## Auth Ports
//!
//! - `PasswordHasher` - one-way password hashing
//! - `TokenService` - bearer token issue/verify
//!
//! ## Payment Ports
//!
//! - `PaymentGateway` - remote payment API
//! - `PaymentEventSink` - side effects of verified payment webhooks

mod password_hasher;
mod payment_event_sink;
mod payment_gateway;
mod plan_repository;
mod token_service;
mod unit_of_work;
mod user_repository;

pub use password_hasher::PasswordHasher;
pub use payment_event_sink::PaymentEventSink;
pub use payment_gateway::{PaymentGateway, WebhookSubscription};
pub use plan_repository::PlanRepository;
pub use token_service::TokenService;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
pub use user_repository::UserRepository;

pub use crate::domain::gateway::GatewayError;
