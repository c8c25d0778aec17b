//! Keys of the per-user attributes this service reads and writes.

use std::fmt;
use std::str::FromStr;

/// Stored value of a boolean attribute set to true
pub const META_TRUE: &str = "1";

/// Per-user attribute keys
///
/// The string forms are the keys already present in stored data and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    /// Phone number, normalized to `+<digits>`
    Mobile,
    /// Set to `1` once the phone was verified
    MobileVerified,
    /// Pending one-time code
    MobileVerifyCode,
}

impl MetaKey {
    pub const ALL: [MetaKey; 3] = [
        MetaKey::Mobile,
        MetaKey::MobileVerified,
        MetaKey::MobileVerifyCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Mobile => "mobile",
            MetaKey::MobileVerified => "mobile_verified",
            MetaKey::MobileVerifyCode => "mobile_verify_code",
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetaKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetaKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown attribute key: {}", s))
    }
}

/// Interpret a stored boolean attribute the way the site does: empty, `0`
/// and `false` are false, anything else is true
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}
