//! Foundation module - Shared domain primitives.
//!
//! Identifiers, error types and authentication vocabulary used by every
//! billing area.

mod auth;
mod errors;
mod ids;

pub use auth::{AccessToken, AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PlanId, UserId};
