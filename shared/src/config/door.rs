//! Door-unlock endpoint configuration

use serde::{Deserialize, Serialize};

/// Settings for the shop's door controller
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorConfig {
    /// Endpoint receiving the access request
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification (the controller uses a self-signed cert)
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,

    /// Site timezone as an offset from UTC, used for the `hora` field
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Role that may not open the door
    #[serde(default = "default_blocked_role")]
    pub blocked_role: String,

    /// Address shown to users whose access is refused
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
            accept_invalid_certs: default_accept_invalid_certs(),
            utc_offset_minutes: 0,
            blocked_role: default_blocked_role(),
            contact_email: default_contact_email(),
        }
    }
}

impl DoorConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("DOOR_URL").unwrap_or(defaults.url),
            timeout_secs: std::env::var("DOOR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            accept_invalid_certs: std::env::var("DOOR_ACCEPT_INVALID_CERTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.accept_invalid_certs),
            utc_offset_minutes: std::env::var("DOOR_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.utc_offset_minutes),
            blocked_role: std::env::var("DOOR_BLOCKED_ROLE").unwrap_or(defaults.blocked_role),
            contact_email: std::env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
        }
    }

    /// Point the opener at another endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

fn default_url() -> String {
    String::from("http://ghoptienda.ddns.net:8080/acceso")
}

fn default_timeout() -> u64 {
    60
}

fn default_accept_invalid_certs() -> bool {
    true
}

fn default_blocked_role() -> String {
    String::from("contributor")
}

fn default_contact_email() -> String {
    String::from("hola@ghop.es")
}
