//! # Ghop Core
//!
//! Core business logic for the Ghop access services.
//! This crate contains domain entities, the phone verification and door
//! access services, the user store interface they depend on, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
