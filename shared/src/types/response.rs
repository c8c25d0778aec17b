//! Response envelope returned by every caller-facing action
//!
//! The shape mirrors what the site's frontend script reads:
//! `{"success": bool, "data": {"message": "..."}}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message payload carried in `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    /// Human-readable message shown next to the button or in the dialog
    pub message: String,

    /// Machine-readable error code (errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Action-specific fields (dialog step, verification state, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            extra: HashMap::new(),
        }
    }
}

/// Success flag plus message, the result of one caller-facing action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action succeeded
    pub success: bool,

    /// Message and any extra fields
    pub data: MessageData,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,

    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ActionResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: MessageData::new(message),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        let mut data = MessageData::new(message);
        data.code = Some(code.into());
        Self {
            success: false,
            data,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Attach an extra field to `data`
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.extra.insert(key.into(), value);
        }
        self
    }

    /// Add request ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Read back an extra field
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.extra.get(key)
    }
}
