//! SMS Gateway Trait Adapter
//!
//! Implements the core `SmsGatewayTrait` on top of whichever provider was
//! configured. With no provider the gateway reports itself unavailable.

use async_trait::async_trait;
use ghop_core::services::verification::SmsGatewayTrait;

use super::sms_service::SmsService;

/// Adapter that implements the core SmsGatewayTrait for any SmsService
pub struct SmsGatewayAdapter {
    inner: Option<Box<dyn SmsService>>,
}

impl SmsGatewayAdapter {
    pub fn new(inner: Box<dyn SmsService>) -> Self {
        Self { inner: Some(inner) }
    }

    /// Gateway without a provider
    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    /// Name of the wrapped provider, if any
    pub fn provider_name(&self) -> Option<&str> {
        self.inner.as_ref().map(|service| service.provider_name())
    }
}

#[async_trait]
impl SmsGatewayTrait for SmsGatewayAdapter {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        match &self.inner {
            Some(service) => service
                .send_sms(phone, message)
                .await
                .map_err(|e| e.to_string()),
            None => Err("no SMS provider configured".to_string()),
        }
    }

    fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}
