//! Unit tests for domain error types

use crate::errors::{AccessError, DomainError, VerificationError};

#[test]
fn test_verification_error_codes() {
    let error: DomainError = VerificationError::InvalidPhone {
        phone: "123".to_string(),
    }
    .into();
    assert_eq!(error.error_code(), "INVALID_PHONE");
    assert!(error.to_string().contains("123"));

    let error: DomainError = VerificationError::PhoneDuplicated.into();
    assert_eq!(error.error_code(), "PHONE_DUPLICATED");
    assert!(!error.is_internal());
}

#[test]
fn test_access_error_codes() {
    let error: DomainError = AccessError::RoleNotAllowed {
        role: "contributor".to_string(),
    }
    .into();
    assert_eq!(error.error_code(), "ROLE_NOT_ALLOWED");

    let error: DomainError = AccessError::UpstreamHttpError { status: 503 }.into();
    assert_eq!(error.error_code(), "UPSTREAM_HTTP_ERROR");
    assert!(error.to_string().contains("503"));
    assert!(error.is_internal());
}

#[test]
fn test_gateway_unavailable_is_internal() {
    let error: DomainError = VerificationError::GatewayUnavailable {
        reason: "no provider".to_string(),
    }
    .into();
    assert!(error.is_internal());
    assert_eq!(error.error_code(), "GATEWAY_UNAVAILABLE");
}

#[test]
fn test_general_error_codes() {
    assert_eq!(DomainError::Unauthorized.error_code(), "UNAUTHORIZED");
    assert_eq!(
        DomainError::Internal { message: "boom".to_string() }.error_code(),
        "INTERNAL_ERROR"
    );
    assert!(DomainError::Internal { message: "boom".to_string() }.is_internal());
}
