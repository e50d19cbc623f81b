//! Plan-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | AlreadyExists | 400 |
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Gateway | upstream status (502 when no response) |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, ValidationError};
use crate::domain::gateway::GatewayError;

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Pricing plan with this name already exists")]
    AlreadyExists(String),

    #[error("Pricing plan not found")]
    NotFound(PlanId),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl PlanError {
    pub fn already_exists(name: impl Into<String>) -> Self {
        PlanError::AlreadyExists(name.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::AlreadyExists(_) => ErrorCode::PlanAlreadyExists,
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::Validation(_) => ErrorCode::ValidationFailed,
            PlanError::Gateway(_) => ErrorCode::ExternalServiceError,
            PlanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::AlreadyExists(_) | PlanError::Validation(_) => 400,
            PlanError::NotFound(_) => 404,
            PlanError::Gateway(err) => err.status_code(),
            PlanError::Infrastructure(_) => 500,
        }
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PlanAlreadyExists => PlanError::AlreadyExists(
                err.details.get("name").cloned().unwrap_or_default(),
            ),
            _ => PlanError::Infrastructure(err.to_string()),
        }
    }
}
