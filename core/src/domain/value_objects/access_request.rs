//! Payload sent to the door controller when a user opens the shop.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Format of the local time field expected by the controller
pub const HORA_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of the door-unlock request
///
/// Field names are fixed by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Login of the user opening the door
    pub username: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`
    pub hora: String,
    /// UNIX timestamp in seconds
    pub datetime: i64,
}

impl AccessRequest {
    /// Build the request for `username` at instant `now`, rendering `hora` in
    /// the site's timezone
    pub fn new(username: impl Into<String>, now: DateTime<Utc>, site_offset: FixedOffset) -> Self {
        Self {
            username: username.into(),
            hora: now.with_timezone(&site_offset).format(HORA_FORMAT).to_string(),
            datetime: now.timestamp(),
        }
    }
}

/// Outcome of a successful door-unlock request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessReceipt {
    /// What was sent
    pub request: AccessRequest,
    /// HTTP status returned by the controller
    pub status: u16,
}
