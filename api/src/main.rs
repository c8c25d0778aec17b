use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

use ghop_api::{app::create_app, config, routes::AppState};
use ghop_core::services::{
    DoorAccessConfig, DoorAccessService, PhoneVerificationConfig, PhoneVerificationService,
};
use ghop_infra::{create_sms_gateway, HttpDoorOpener, UserStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_files = config::load_env_files();
    let app_config = config::load();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(app_config.environment.default_log_filter()),
    );

    info!("Starting Ghop access API ({})", app_config.environment);
    for path in &env_files {
        info!("Loaded environment from {}", path.display());
    }
    for warning in config::startup_warnings(&app_config) {
        warn!("{}", warning);
    }
    config::check_startup(&app_config)?;

    let user_store = Arc::new(
        UserStore::connect(&app_config.database)
            .await
            .context("failed to open the user store")?,
    );
    info!("User store backend: {}", user_store.backend_name());

    let sms_gateway = Arc::new(create_sms_gateway(&app_config.sms));
    let door_opener =
        Arc::new(HttpDoorOpener::new(&app_config.door).context("failed to build the door client")?);

    let verification_config = PhoneVerificationConfig::from_settings(&app_config.verification)
        .context("invalid phone verification settings")?;
    let door_config =
        DoorAccessConfig::from_settings(&app_config.door).context("invalid door settings")?;

    let verification_service = Arc::new(PhoneVerificationService::new(
        user_store.clone(),
        sms_gateway,
        verification_config,
    ));
    let door_service = Arc::new(DoorAccessService::new(user_store, door_opener, door_config));

    let app_state = web::Data::new(AppState::new(verification_service, door_service));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = app_config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &server_config));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")
}
