//! Twilio SMS Service Implementation
//!
//! Delivers verification codes through the Twilio messaging API. Each send
//! is a single attempt; a failed delivery is reported to the caller, who
//! asks the user to request a new code.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use tracing::{error, info};
use twilio::{Client, OutboundMessage};

use ghop_shared::config::SmsConfig;

use crate::{
    sms::sms_service::{mask_phone_number, SmsService},
    InfrastructureError,
};

/// Maximum body length accepted by Twilio
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from the generic SMS settings, falling back to
    /// `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and `TWILIO_FROM_NUMBER`
    /// for values left empty
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let pick = |value: &str, var: &str| -> Result<String, InfrastructureError> {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
            std::env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| InfrastructureError::Config(format!("{} not set", var)))
        };

        let account_sid = pick(&config.api_key, "TWILIO_ACCOUNT_SID")?;
        let auth_token = pick(&config.api_secret, "TWILIO_AUTH_TOKEN")?;
        let from_number = pick(&config.from_number, "TWILIO_FROM_NUMBER")?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "Twilio from number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Self { client, config }
    }

    /// Reject bodies longer than Twilio accepts, counted in characters
    pub(crate) fn check_length(message: &str) -> Result<(), InfrastructureError> {
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }
        Ok(())
    }

    /// Validate a `+<digits>` number and render it in E.164
    pub(crate) fn to_e164(phone: &str) -> Result<String, InfrastructureError> {
        if !phone.starts_with('+') {
            return Err(InfrastructureError::Sms(
                "Phone number must include the country code".to_string(),
            ));
        }

        phone
            .parse::<PhoneNumber>()
            .map(|parsed| parsed.format().mode(Mode::E164).to_string())
            .map_err(|e| InfrastructureError::Sms(format!("Invalid phone number format: {}", e)))
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = Self::to_e164(phone_number)?;

        Self::check_length(message)?;

        let outbound = OutboundMessage::new(&self.config.from_number, &to, message);

        match self.client.send_message(outbound).await {
            Ok(response) => {
                info!(
                    provider = "twilio",
                    phone = %mask_phone_number(&to),
                    message_id = %response.sid,
                    "SMS sent successfully"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    provider = "twilio",
                    phone = %mask_phone_number(&to),
                    error = %e,
                    "Failed to send SMS"
                );
                Err(InfrastructureError::Sms(format!("Twilio rejected the message: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
