//! Domain entities representing core business objects.

pub mod user;
pub mod user_meta;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use user::{Role, User, UserId};
pub use user_meta::{is_truthy, MetaKey, META_TRUE};
pub use verification_code::{InvalidCode, OtpCode, CODE_LENGTH, MAX_CODE, MIN_CODE};
