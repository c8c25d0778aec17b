//! Phone verification service module
//!
//! This module provides the phone ownership workflow:
//! - Phone number normalization, shape checks and uniqueness checks
//! - One-time code generation, storage and SMS delivery
//! - Code confirmation and the verified flag
//! - The policy deciding who has to verify

mod config;
mod message;
mod service;
mod traits;
mod types;


pub use config::{PhoneVerificationConfig, DEFAULT_MESSAGE_TEMPLATE};
pub use message::render_message;
pub use service::PhoneVerificationService;
pub use traits::SmsGatewayTrait;
pub use types::SendCodeResult;
