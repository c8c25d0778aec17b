//! Conversion of domain errors into the response envelope
//!
//! Each error kind gets an HTTP status, a stable code and the text the site
//! shows next to the door button or inside the verification dialog.

use actix_web::{http::StatusCode, HttpResponse};

use ghop_core::errors::{AccessError, DomainError, VerificationError};
use ghop_shared::ActionResponse;

use crate::middleware::auth::LOGIN_REQUIRED_MESSAGE;

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please, contact us for assistance.";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";
pub const PHONE_TAKEN_MESSAGE: &str = "The phone number is already taken";
pub const ENTER_PHONE_MESSAGE: &str = "Enter your phone number";
pub const VERIFY_PHONE_MESSAGE: &str = "Verify your phone";
pub const INVALID_CODE_MESSAGE: &str = "The code is not correct";
pub const SMS_UNAVAILABLE_MESSAGE: &str = "We could not send the SMS. Please, try again later.";

/// Message shown to users whose role may not open the door
pub fn suspicious_situation_message(contact_email: &str) -> String {
    format!(
        "We have detected a suspicious situation. Write to us at {} for more details.",
        contact_email
    )
}

/// Status code and user-facing message for a domain error
pub fn status_and_message(error: &DomainError, contact_email: &str) -> (StatusCode, String) {
    match error {
        DomainError::Unauthorized
        | DomainError::Access(AccessError::NotLoggedIn)
        | DomainError::Verification(VerificationError::UserNotFound) => {
            (StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE.to_string())
        }
        DomainError::Access(AccessError::RoleNotAllowed { .. }) => (
            StatusCode::FORBIDDEN,
            suspicious_situation_message(contact_email),
        ),
        DomainError::Access(AccessError::VerificationRequired) => {
            (StatusCode::FORBIDDEN, VERIFY_PHONE_MESSAGE.to_string())
        }
        DomainError::Access(AccessError::UpstreamHttpError { .. })
        | DomainError::Access(AccessError::UpstreamUnreachable { .. }) => {
            (StatusCode::BAD_GATEWAY, UNEXPECTED_ERROR_MESSAGE.to_string())
        }
        DomainError::Verification(VerificationError::InvalidPhone { .. }) => {
            (StatusCode::BAD_REQUEST, INVALID_PHONE_MESSAGE.to_string())
        }
        DomainError::Verification(VerificationError::PhoneDuplicated) => {
            (StatusCode::CONFLICT, PHONE_TAKEN_MESSAGE.to_string())
        }
        DomainError::Verification(VerificationError::NoPhoneOnFile) => {
            (StatusCode::BAD_REQUEST, ENTER_PHONE_MESSAGE.to_string())
        }
        DomainError::Verification(VerificationError::GatewayUnavailable { .. }) => {
            (StatusCode::SERVICE_UNAVAILABLE, SMS_UNAVAILABLE_MESSAGE.to_string())
        }
        DomainError::Verification(VerificationError::CodeMismatch) => {
            (StatusCode::BAD_REQUEST, INVALID_CODE_MESSAGE.to_string())
        }
        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, UNEXPECTED_ERROR_MESSAGE.to_string()),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            UNEXPECTED_ERROR_MESSAGE.to_string(),
        ),
    }
}

/// Dialog step the user should see after a failed verification action
fn dialog_step(error: &DomainError) -> Option<u8> {
    match error {
        DomainError::Verification(VerificationError::InvalidPhone { .. })
        | DomainError::Verification(VerificationError::PhoneDuplicated)
        | DomainError::Verification(VerificationError::NoPhoneOnFile) => Some(1),
        DomainError::Verification(VerificationError::CodeMismatch) => Some(2),
        _ => None,
    }
}

/// Build the error envelope for a domain error
pub fn error_envelope(error: &DomainError, contact_email: &str) -> (StatusCode, ActionResponse) {
    let (status, message) = status_and_message(error, contact_email);
    let mut response = ActionResponse::error(error.error_code(), message);

    if let Some(step) = dialog_step(error) {
        response = response.with_field("step", step);
    }
    if matches!(error, DomainError::Access(AccessError::VerificationRequired)) {
        response = response.with_field("verification_required", true);
    }

    (status, response)
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, contact_email: &str, request_id: &str) -> HttpResponse {
    if error.is_internal() {
        log::error!("[{}] Request failed: {}", request_id, error);
    } else {
        log::warn!("[{}] Request refused: {}", request_id, error);
    }

    let (status, response) = error_envelope(&error, contact_email);
    HttpResponse::build(status).json(response.with_request_id(request_id))
}
