use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /phone/send-code`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Number to register before sending; the stored number is used when absent
    /// Examples: "+34600111222", "600 111 222"
    #[serde(default)]
    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,
}

impl SendCodeRequest {
    /// The submitted number, ignoring blank input
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

/// Body of `POST /phone/verify-code`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// 6-digit verification code from the SMS
    #[validate(length(equal = 6))]
    pub code: String,
}
