//! Configuration for the phone verification service

use ghop_shared::config::VerificationConfig;

use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult};

/// SMS text used when no template is configured
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "This is the code to verify your phone number: %otp%";

/// Configuration for the phone verification service
#[derive(Debug, Clone)]
pub struct PhoneVerificationConfig {
    /// Feature flag; when off nobody needs to verify
    pub enabled: bool,
    /// Only holders of this role must verify
    pub required_role: Role,
    /// SMS text with `%otp%`-style placeholders
    pub message_template: String,
}

impl Default for PhoneVerificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            required_role: Role::Subscriber,
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }
}

impl PhoneVerificationConfig {
    /// Enabled configuration with default role and message
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Build from loaded settings, rejecting unknown role names
    pub fn from_settings(settings: &VerificationConfig) -> DomainResult<Self> {
        let required_role = settings
            .required_role
            .parse::<Role>()
            .map_err(|message| DomainError::Validation { message })?;

        Ok(Self {
            enabled: settings.enabled,
            required_role,
            message_template: settings
                .message_template
                .clone()
                .unwrap_or_else(|| DEFAULT_MESSAGE_TEMPLATE.to_string()),
        })
    }
}
