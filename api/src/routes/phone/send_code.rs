use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ghop_core::errors::{DomainError, VerificationError};
use ghop_core::repositories::UserRepository;
use ghop_core::services::{DoorOpenerTrait, SmsGatewayTrait};
use ghop_shared::phone::mask_phone_number;
use ghop_shared::ActionResponse;

use crate::dto::SendCodeRequest;
use crate::handlers::{handle_domain_error, request_id};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub const CODE_SENT_MESSAGE: &str = "We sent you a SMS with a code";

/// Handler for POST /api/v1/phone/send-code
///
/// # Request Body
///
/// ```json
/// { "phone": "+34600111222" }
/// ```
///
/// `phone` is optional. When present the number is normalized, checked and
/// stored before the code is sent; `{}` sends to the stored number. A body
/// that is not valid JSON is refused with 400 `INVALID_BODY`.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": { "message": "We sent you a SMS with a code", "step": 2, "phone": "+346****222" },
///     "timestamp": "2024-03-09T22:15:00Z"
/// }
/// ```
pub async fn send_code<U, S, D>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<U, S, D>>,
    body: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGatewayTrait + 'static,
    D: DoorOpenerTrait + 'static,
{
    let request_id = request_id(&req);
    let request = body.into_inner();
    let service = &state.verification_service;

    if request.validate().is_err() {
        let phone = request.phone.clone().unwrap_or_default();
        return handle_domain_error(
            DomainError::Verification(VerificationError::InvalidPhone {
                phone: mask_phone_number(&phone),
            }),
            state.contact_email(),
            &request_id,
        );
    }

    if let Some(raw_phone) = request.phone() {
        log::info!(
            "[{}] Registering phone {} for user {}",
            request_id,
            mask_phone_number(raw_phone),
            auth.user_id
        );
        if let Err(e) = service.register_phone(auth.user_id, raw_phone).await {
            return handle_domain_error(e, state.contact_email(), &request_id);
        }
    }

    match service.send_verification_code(auth.user_id, None).await {
        Ok(sent) => {
            log::info!(
                "[{}] Verification code sent to {} (message {})",
                request_id,
                mask_phone_number(&sent.phone),
                sent.message_id
            );
            let response = ActionResponse::success(CODE_SENT_MESSAGE)
                .with_field("step", 2)
                .with_field("phone", mask_phone_number(&sent.phone))
                .with_request_id(request_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => handle_domain_error(e, state.contact_email(), &request_id),
    }
}
