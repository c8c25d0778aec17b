//! Door access service module
//!
//! Sends the unlock request for a logged-in user to the shop's door
//! controller, refusing blocked roles.

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::DoorAccessConfig;
pub use service::DoorAccessService;
pub use traits::DoorOpenerTrait;
