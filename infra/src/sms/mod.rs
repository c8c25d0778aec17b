//! SMS Service Module
//!
//! This module provides SMS service implementations for delivering
//! verification codes.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Log output for development
//! - **Twilio Support**: Production SMS via Twilio API
//! - **Gateway Adapter**: Bridges the configured provider to the core service

pub mod gateway_adapter;
pub mod mock_sms;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use gateway_adapter::SmsGatewayAdapter;
pub use mock_sms::{MockSmsService, SentSms};
pub use sms_service::{mask_phone_number, SmsService};

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

use ghop_shared::config::{SmsConfig, SmsProvider};

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Returns `None` when no provider is configured or the configured one
/// cannot be initialized; verification then reports the gateway as
/// unavailable instead of pretending to send.
pub fn create_sms_service(config: &SmsConfig) -> Option<Box<dyn SmsService>> {
    match config.provider {
        SmsProvider::None => {
            tracing::warn!("No SMS provider configured, verification codes cannot be sent");
            None
        }
        SmsProvider::Mock => {
            tracing::warn!("Using mock SMS provider, messages are only logged");
            Some(Box::new(MockSmsService::new()))
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => match TwilioConfig::from_sms_config(config) {
            Ok(twilio_config) => Some(Box::new(TwilioSmsService::new(twilio_config))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize Twilio SMS service");
                None
            }
        },
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => {
            tracing::error!("Twilio requested but the twilio-sms feature is disabled");
            None
        }
    }
}

/// Create the gateway handed to the phone verification service
pub fn create_sms_gateway(config: &SmsConfig) -> SmsGatewayAdapter {
    match create_sms_service(config) {
        Some(service) => {
            tracing::info!(provider = service.provider_name(), "SMS gateway ready");
            SmsGatewayAdapter::new(service)
        }
        None => SmsGatewayAdapter::unavailable(),
    }
}
