//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AccessError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

impl DomainError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Unauthorized => "UNAUTHORIZED",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Verification(e) => e.error_code(),
            DomainError::Access(e) => e.error_code(),
        }
    }

    /// Whether the failure came from a collaborator rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Internal { .. }
                | DomainError::Verification(VerificationError::GatewayUnavailable { .. })
                | DomainError::Access(AccessError::UpstreamHttpError { .. })
                | DomainError::Access(AccessError::UpstreamUnreachable { .. })
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
