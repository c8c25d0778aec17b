//! Session verification configuration
//!
//! Sessions are issued by the site; this service only checks the bearer
//! token signature and expiry.

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "change-me-session-secret";

/// Shared-secret settings for validating session tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// HS256 secret shared with the site that issues session tokens
    pub secret: String,

    /// Clock skew tolerated when checking `exp`, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            leeway_seconds: default_leeway(),
        }
    }
}

impl SessionConfig {
    /// Create a session configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from `SESSION_SECRET` and `SESSION_LEEWAY_SECS`
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            leeway_seconds: std::env::var("SESSION_LEEWAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_leeway),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_leeway() -> u64 {
    30
}
