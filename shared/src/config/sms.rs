//! SMS gateway configuration

use serde::{Deserialize, Serialize};

/// Which SMS provider delivers verification codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// No gateway configured; every send reports the gateway as unavailable
    None,
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// Twilio programmable messaging
    Twilio,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "disabled" => Ok(SmsProvider::None),
            "mock" => Ok(SmsProvider::Mock),
            "twilio" => Ok(SmsProvider::Twilio),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProvider,
    /// API credentials (Twilio account SID)
    pub api_key: String,
    /// API secret (Twilio auth token)
    pub api_secret: String,
    /// From phone number
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::default(),
            api_key: String::new(),
            api_secret: String::new(),
            from_number: String::new(),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            api_key: std::env::var("SMS_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("SMS_API_SECRET").unwrap_or_default(),
            from_number: std::env::var("SMS_FROM_NUMBER").unwrap_or_default(),
        }
    }
}
