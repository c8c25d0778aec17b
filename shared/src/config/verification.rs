//! Phone verification configuration

use serde::{Deserialize, Serialize};

/// Feature flag and policy for the phone verification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Whether users must verify their phone at all
    #[serde(default)]
    pub enabled: bool,

    /// Role whose holders must verify
    #[serde(default = "default_required_role")]
    pub required_role: String,

    /// SMS text overriding the built-in one; supports `%otp%`, `%user_name%`,
    /// `%first_name%`, `%last_name%` and `%nickname%`
    #[serde(default)]
    pub message_template: Option<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            required_role: default_required_role(),
            message_template: None,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("PHONE_VERIFICATION_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            required_role: std::env::var("PHONE_VERIFICATION_ROLE")
                .unwrap_or_else(|_| default_required_role()),
            message_template: std::env::var("PHONE_VERIFICATION_MESSAGE")
                .ok()
                .filter(|m| !m.trim().is_empty()),
        }
    }
}

fn default_required_role() -> String {
    String::from("subscriber")
}
