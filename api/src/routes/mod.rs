//! Route handlers
//!
//! - `door` - remote door unlock
//! - `phone` - phone verification dialog (status, send code, verify code)

pub mod door;
pub mod phone;

use std::sync::Arc;

use ghop_core::repositories::UserRepository;
use ghop_core::services::{
    DoorAccessService, DoorOpenerTrait, PhoneVerificationService, SmsGatewayTrait,
};

/// Application state that holds shared services
pub struct AppState<U, S, D>
where
    U: UserRepository,
    S: SmsGatewayTrait,
    D: DoorOpenerTrait,
{
    pub verification_service: Arc<PhoneVerificationService<U, S>>,
    pub door_service: Arc<DoorAccessService<U, D>>,
}

impl<U, S, D> AppState<U, S, D>
where
    U: UserRepository,
    S: SmsGatewayTrait,
    D: DoorOpenerTrait,
{
    pub fn new(
        verification_service: Arc<PhoneVerificationService<U, S>>,
        door_service: Arc<DoorAccessService<U, D>>,
    ) -> Self {
        Self {
            verification_service,
            door_service,
        }
    }

    /// Address shown in refusal messages
    pub fn contact_email(&self) -> &str {
        self.door_service.contact_email()
    }
}
