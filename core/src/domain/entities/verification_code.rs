//! One-time code sent by SMS to prove phone ownership.

use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest code ever generated
pub const MIN_CODE: u32 = 111_111;

/// Largest code ever generated
pub const MAX_CODE: u32 = 999_999;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// A six-digit one-time code in `[MIN_CODE, MAX_CODE]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct OtpCode(u32);

impl OtpCode {
    /// Generates a code using the OS-provided CSPRNG
    pub fn generate() -> Self {
        OtpCode(OsRng.gen_range(MIN_CODE..=MAX_CODE))
    }

    /// Wraps a value, rejecting anything outside the code range
    pub fn new(value: u32) -> Result<Self, InvalidCode> {
        if (MIN_CODE..=MAX_CODE).contains(&value) {
            Ok(OtpCode(value))
        } else {
            Err(InvalidCode)
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// The submitted or stored text is not a code this service could have issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCode;

impl fmt::Display for InvalidCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verification code must be {} digits between {} and {}", CODE_LENGTH, MIN_CODE, MAX_CODE)
    }
}

impl std::error::Error for InvalidCode {}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OtpCode {
    type Err = InvalidCode;

    /// Accepts exactly six ASCII digits; no sign, padding or whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != CODE_LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCode);
        }
        let value: u32 = s.parse().map_err(|_| InvalidCode)?;
        OtpCode::new(value)
    }
}

impl TryFrom<u32> for OtpCode {
    type Error = InvalidCode;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        OtpCode::new(value)
    }
}

impl From<OtpCode> for u32 {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}
