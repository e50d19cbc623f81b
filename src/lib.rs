//! PayMongo Billing - Subscription billing API
//!
//! Account registration and login with bearer tokens, pricing plans mirrored
//! to PayMongo, hosted checkout sessions, and signed PayMongo webhooks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
