//! Mock SMS Service Implementation
//!
//! Logs messages instead of sending them. The full text, code included, is
//! written at debug level so codes can be read during development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::sms_service::{mask_phone_number, SmsService};
use crate::InfrastructureError;

/// Message captured by the mock service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub phone_number: String,
    pub message: String,
    pub message_id: String,
}

/// Mock SMS service for development and testing
#[derive(Clone, Default)]
pub struct MockSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last message accepted
    last_message: Arc<Mutex<Option<SentSms>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last message accepted, if any
    pub fn last_message(&self) -> Option<SentSms> {
        self.last_message
            .lock()
            .map(|last| last.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked_phone = mask_phone_number(phone_number);

        if self.simulate_failure {
            warn!(phone = %masked_phone, "Mock SMS service simulating failure");
            return Err(InfrastructureError::Sms(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut last) = self.last_message.lock() {
            *last = Some(SentSms {
                phone_number: phone_number.to_string(),
                message: message.to_string(),
                message_id: message_id.clone(),
            });
        }

        debug!(
            target: "sms_service",
            phone = %masked_phone,
            content = %message,
            "Mock SMS content"
        );
        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
