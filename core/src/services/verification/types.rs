//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Phone number the code was sent to
    pub phone: String,
    /// The SMS message ID from the provider
    pub message_id: String,
    /// When the gateway accepted the message
    pub sent_at: DateTime<Utc>,
}
