//! Trait for SMS gateway integration

use async_trait::async_trait;

/// Trait for SMS gateway integration
#[async_trait]
pub trait SmsGatewayTrait: Send + Sync {
    /// Deliver a rendered text message; returns the provider's message ID
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String>;
    /// Whether a provider is configured at all
    fn is_available(&self) -> bool;
}
