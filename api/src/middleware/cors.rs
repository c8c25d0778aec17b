//! CORS middleware configuration for the site frontend.
//!
//! The door button and the verification dialog run on the WordPress site, so
//! in production only the configured site origins may call the API. In
//! development any origin is accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ghop_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance configured for the environment
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config)
    }
}

fn create_development_cors(config: &CorsConfig) -> Cors {
    log::debug!("Configuring permissive CORS for {}", Environment::Development);

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age)
        .supports_credentials()
}

fn create_production_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::debug!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
