//! Business services of the access system.

pub mod door;
pub mod verification;

pub use door::{DoorAccessConfig, DoorAccessService, DoorOpenerTrait};
pub use verification::{
    render_message, PhoneVerificationConfig, PhoneVerificationService, SendCodeResult,
    SmsGatewayTrait, DEFAULT_MESSAGE_TEMPLATE,
};
