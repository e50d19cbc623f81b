//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, auth types)
//! - `user` - Registered accounts and email validation
//! - `plan` - Subscription pricing plans
//! - `checkout` - Single-item checkout orders
//! - `gateway` - Payment gateway failure vocabulary and currency helpers
//! - `webhook` - Signature verification and event dispatch decisions

pub mod checkout;
pub mod foundation;
pub mod gateway;
pub mod plan;
pub mod user;
pub mod webhook;
