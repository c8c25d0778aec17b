//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core services depend on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: the WordPress user store in MySQL (SQLx) and an in-memory store
//! - **SMS**: gateways delivering verification codes (mock, Twilio)
//! - **Door**: the HTTP client for the shop's door controller
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS gateway (default)

// Re-export core types for convenience
pub use ghop_core::errors::*;

/// Database module - user attribute stores
pub mod database;

/// Door module - door controller client
pub mod door;

/// SMS service module - External SMS providers
pub mod sms;

pub use database::{DatabasePool, InMemoryUserStore, MySqlUserStore, UserStore};
pub use door::HttpDoorOpener;
pub use sms::{create_sms_gateway, SmsGatewayAdapter};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Seed file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
