//! Shared utilities and common types for Ghop services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The `{success, data}` response envelope returned to callers
//! - Phone number utilities (normalization, shape check, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, DoorConfig, Environment, ServerConfig, SmsConfig,
    UserStoreBackend, VerificationConfig,
};
pub use types::{ActionResponse, MessageData};
pub use utils::phone;
