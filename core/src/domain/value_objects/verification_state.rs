//! Phone verification state derived from stored attributes.

use serde::{Deserialize, Serialize};

/// Where a user stands in the phone verification flow
///
/// There is no stored marker for this; it is inferred from the verified flag
/// and the presence of a pending code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// No pending code and not verified
    Unverified,
    /// A code was issued and awaits confirmation
    CodeSent,
    /// Phone ownership confirmed (terminal)
    Verified,
}

impl VerificationState {
    /// Derive the state; the verified flag wins over a leftover code
    pub fn from_attributes(verified: bool, has_pending_code: bool) -> Self {
        match (verified, has_pending_code) {
            (true, _) => VerificationState::Verified,
            (false, true) => VerificationState::CodeSent,
            (false, false) => VerificationState::Unverified,
        }
    }

    /// Step of the verification dialog matching this state (1 = enter phone,
    /// 2 = enter code, 3 = done)
    pub fn dialog_step(&self) -> u8 {
        match self {
            VerificationState::Unverified => 1,
            VerificationState::CodeSent => 2,
            VerificationState::Verified => 3,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationState::Verified)
    }
}
