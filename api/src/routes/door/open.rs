use actix_web::{web, HttpRequest, HttpResponse};

use ghop_core::errors::AccessError;
use ghop_core::repositories::UserRepository;
use ghop_core::services::{DoorOpenerTrait, SmsGatewayTrait};
use ghop_shared::ActionResponse;

use crate::handlers::{handle_domain_error, request_id};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub const DOOR_OPENED_MESSAGE: &str = "Shop opened. Welcome!";

/// Handler for POST /api/v1/door/open
///
/// Users that still have to verify their phone get a `verification_required`
/// error so the site can open the verification dialog instead.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": { "message": "Shop opened. Welcome!" },
///     "timestamp": "2024-03-09T22:15:00Z",
///     "request_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
pub async fn open_door<U, S, D>(
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
    log::info!("[{}] Door open requested by user {}", request_id, auth.user_id);

    if state.verification_service.needs_verification(auth.user_id).await {
        return handle_domain_error(
            AccessError::VerificationRequired.into(),
            state.contact_email(),
            &request_id,
        );
    }

    match state.door_service.open_door(auth.user_id).await {
        Ok(receipt) => {
            log::info!(
                "[{}] Door opened for {} (status {})",
                request_id,
                receipt.request.username,
                receipt.status
            );
            HttpResponse::Ok().json(ActionResponse::success(DOOR_OPENED_MESSAGE).with_request_id(request_id))
        }
        Err(e) => handle_domain_error(e, state.contact_email(), &request_id),
    }
}
