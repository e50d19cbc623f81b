//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT access tokens and Argon2 password hashing
//! - `http` - axum routers, DTOs, error mapping
//! - `memory` - in-memory unit of work
//! - `paymongo` - PayMongo REST client and a recording mock
//! - `payments` - payment event sinks
//! - `postgres` - sqlx unit of work and repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod paymongo;
pub mod payments;
pub mod postgres;
