use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ghop_core::domain::entities::verification_code::OtpCode;
use ghop_core::errors::VerificationError;
use ghop_core::repositories::UserRepository;
use ghop_core::services::{DoorOpenerTrait, SmsGatewayTrait};
use ghop_shared::ActionResponse;

use crate::dto::VerifyCodeRequest;
use crate::handlers::{handle_domain_error, request_id};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub const PHONE_VERIFIED_MESSAGE: &str = "Your phone was verified successfully.";

/// Handler for POST /api/v1/phone/verify-code
///
/// # Request Body
///
/// ```json
/// { "code": "423891" }
/// ```
///
/// A malformed code is answered like a wrong one. On success the pending
/// code is consumed and the dialog moves to step 3.
pub async fn verify_code<U, S, D>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, S, D>>,
    body: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGatewayTrait + 'static,
    D: DoorOpenerTrait + 'static,
{
    let request_id = request_id(&req);
    let request = body.into_inner();

    let code = match request.validate() {
        Ok(()) => request.code.trim().parse::<OtpCode>().ok(),
        Err(_) => None,
    };
    let Some(code) = code else {
        return handle_domain_error(
            VerificationError::CodeMismatch.into(),
            state.contact_email(),
            &request_id,
        );
    };

    match state.verification_service.verify_code(auth.user_id, code).await {
        Ok(()) => {
            log::info!("[{}] Phone verified for user {}", request_id, auth.user_id);
            let response = ActionResponse::success(PHONE_VERIFIED_MESSAGE)
                .with_field("step", 3)
                .with_request_id(request_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => handle_domain_error(e, state.contact_email(), &request_id),
    }
}
