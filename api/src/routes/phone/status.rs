use actix_web::{web, HttpRequest, HttpResponse};

use ghop_core::domain::value_objects::VerificationState;
use ghop_core::repositories::UserRepository;
use ghop_core::services::{DoorOpenerTrait, SmsGatewayTrait};
use ghop_shared::phone::mask_phone_number;
use ghop_shared::ActionResponse;

use crate::handlers::{handle_domain_error, request_id};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

fn state_message(state: VerificationState) -> &'static str {
    match state {
        VerificationState::Unverified => "Enter your phone number",
        VerificationState::CodeSent => "We sent you a SMS with a code",
        VerificationState::Verified => "Your phone was verified successfully.",
    }
}

/// Handler for GET /api/v1/phone/status
///
/// Reports whether the user must verify, the verification state, the stored
/// number (masked) and the dialog step to show.
pub async fn phone_status<U, S, D>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, S, D>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGatewayTrait + 'static,
    D: DoorOpenerTrait + 'static,
{
    let request_id = request_id(&req);
    let service = &state.verification_service;

    let verification_state = match service.verification_state(auth.user_id).await {
        Ok(verification_state) => verification_state,
        Err(e) => return handle_domain_error(e, state.contact_email(), &request_id),
    };
    let phone = match service.get_user_phone(auth.user_id).await {
        Ok(phone) => phone.map(|p| mask_phone_number(&p)),
        Err(e) => return handle_domain_error(e, state.contact_email(), &request_id),
    };
    let needs_verification = service.needs_verification(auth.user_id).await;

    log::debug!(
        "[{}] Phone status for user {}: {:?}",
        request_id,
        auth.user_id,
        verification_state
    );

    let response = ActionResponse::success(state_message(verification_state))
        .with_field("needs_verification", needs_verification)
        .with_field("state", verification_state)
        .with_field("phone", phone)
        .with_field("step", verification_state.dialog_step())
        .with_request_id(request_id);

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_messages() {
        assert_eq!(state_message(VerificationState::Unverified), "Enter your phone number");
        assert_eq!(state_message(VerificationState::CodeSent), "We sent you a SMS with a code");
        assert_eq!(
            state_message(VerificationState::Verified),
            "Your phone was verified successfully."
        );
    }
}
