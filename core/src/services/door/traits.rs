//! Trait for the door controller client

use async_trait::async_trait;

use crate::domain::value_objects::AccessRequest;

/// Trait for the door controller client
#[async_trait]
pub trait DoorOpenerTrait: Send + Sync {
    /// Send an access request; returns the HTTP status the controller
    /// answered with, or a description of the transport failure
    async fn send_access_request(&self, request: &AccessRequest) -> Result<u16, String>;
}
