//! Error types for the phone verification and door access flows
//!
//! Display strings are for logs. The texts shown to site users are chosen in
//! the presentation layer from the error code.

use thiserror::Error;

/// Phone verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Invalid phone number: {phone}")]
    InvalidPhone { phone: String },

    #[error("Phone number already taken by another user")]
    PhoneDuplicated,

    #[error("User not found")]
    UserNotFound,

    #[error("No phone number on file")]
    NoPhoneOnFile,

    #[error("SMS gateway unavailable: {reason}")]
    GatewayUnavailable { reason: String },

    #[error("Verification code does not match")]
    CodeMismatch,
}

impl VerificationError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            VerificationError::InvalidPhone { .. } => "INVALID_PHONE",
            VerificationError::PhoneDuplicated => "PHONE_DUPLICATED",
            VerificationError::UserNotFound => "USER_NOT_FOUND",
            VerificationError::NoPhoneOnFile => "NO_PHONE_ON_FILE",
            VerificationError::GatewayUnavailable { .. } => "GATEWAY_UNAVAILABLE",
            VerificationError::CodeMismatch => "CODE_MISMATCH",
        }
    }
}

/// Door access failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Role {role} may not open the door")]
    RoleNotAllowed { role: String },

    #[error("Phone verification required")]
    VerificationRequired,

    #[error("Door controller answered with status {status}")]
    UpstreamHttpError { status: u16 },

    #[error("Door controller unreachable: {message}")]
    UpstreamUnreachable { message: String },
}

impl AccessError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::NotLoggedIn => "NOT_LOGGED_IN",
            AccessError::RoleNotAllowed { .. } => "ROLE_NOT_ALLOWED",
            AccessError::VerificationRequired => "VERIFICATION_REQUIRED",
            AccessError::UpstreamHttpError { .. } => "UPSTREAM_HTTP_ERROR",
            AccessError::UpstreamUnreachable { .. } => "UPSTREAM_UNREACHABLE",
        }
    }
}
