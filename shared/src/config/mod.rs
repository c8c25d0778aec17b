//! Configuration module with business-specific sub-modules
//!
//! - `auth` - session token verification
//! - `database` - user-attribute store backend and MySQL pool
//! - `door` - door controller endpoint
//! - `environment` - environment detection
//! - `server` - HTTP server and CORS
//! - `sms` - SMS provider credentials
//! - `verification` - phone verification feature flag and policy

pub mod auth;
pub mod database;
pub mod door;
pub mod environment;
pub mod server;
pub mod sms;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::SessionConfig;
pub use database::{DatabaseConfig, UserStoreBackend};
pub use door::DoorConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
pub use sms::{SmsConfig, SmsProvider};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub sms: SmsConfig,
    pub door: DoorConfig,
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            session: SessionConfig::from_env(),
            sms: SmsConfig::from_env(),
            door: DoorConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}
