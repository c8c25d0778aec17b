//! Value objects derived from entities or exchanged with collaborators.

pub mod access_request;
pub mod verification_state;

pub use access_request::{AccessReceipt, AccessRequest, HORA_FORMAT};
pub use verification_state::VerificationState;
