//! Application factory
//!
//! Builds the actix-web application with its middleware and routes. The
//! binary and the integration tests share this function.

use actix_web::{
    error::InternalError, middleware::Logger, web, App, HttpResponse,
};

use ghop_core::repositories::UserRepository;
use ghop_core::services::{DoorOpenerTrait, SmsGatewayTrait};
use ghop_shared::config::AppConfig;
use ghop_shared::ActionResponse;

use crate::handlers::error::UNEXPECTED_ERROR_MESSAGE;
use crate::middleware::{auth::SessionAuth, cors::create_cors};
use crate::routes::{door, phone, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, D>(
    app_state: web::Data<AppState<U, S, D>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SmsGatewayTrait + 'static,
    D: DoorOpenerTrait + 'static,
{
    let cors = create_cors(&config.server.cors, config.environment);
    let session = SessionAuth::new(&config.session);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            let response = HttpResponse::BadRequest()
                .json(ActionResponse::error("INVALID_BODY", "Invalid request body"));
            InternalError::from_response(err, response).into()
        }))
        // Logger is registered last so it wraps CORS and sees every response
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .wrap(session)
                .service(web::scope("/door").route("/open", web::post().to(door::open_door::<U, S, D>)))
                .service(
                    web::scope("/phone")
                        .route("/status", web::get().to(phone::phone_status::<U, S, D>))
                        .route("/send-code", web::post().to(phone::send_code::<U, S, D>))
                        .route("/verify-code", web::post().to(phone::verify_code::<U, S, D>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ghop-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ActionResponse::error("NOT_FOUND", UNEXPECTED_ERROR_MESSAGE))
}
