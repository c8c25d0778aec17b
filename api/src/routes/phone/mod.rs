//! Phone verification dialog handlers
//!
//! The dialog has three steps: 1 = enter phone, 2 = enter code, 3 = verified.
//! Every response carries the step the dialog should show next.

pub mod send_code;
pub mod status;
pub mod verify_code;

pub use send_code::{send_code, CODE_SENT_MESSAGE};
pub use status::phone_status;
pub use verify_code::{verify_code, PHONE_VERIFIED_MESSAGE};
