//! Door access service implementation

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::user::UserId;
use crate::domain::value_objects::{AccessReceipt, AccessRequest};
use crate::errors::{AccessError, DomainResult};
use crate::repositories::UserRepository;

use super::config::DoorAccessConfig;
use super::traits::DoorOpenerTrait;

/// Opens the shop door on behalf of site users
pub struct DoorAccessService<U: UserRepository, D: DoorOpenerTrait> {
    user_repository: Arc<U>,
    door_opener: Arc<D>,
    config: DoorAccessConfig,
}

impl<U: UserRepository, D: DoorOpenerTrait> DoorAccessService<U, D> {
    pub fn new(user_repository: Arc<U>, door_opener: Arc<D>, config: DoorAccessConfig) -> Self {
        Self {
            user_repository,
            door_opener,
            config,
        }
    }

    /// Address shown to users whose access is refused
    pub fn contact_email(&self) -> &str {
        &self.config.contact_email
    }

    /// Ask the door controller to let `user_id` in
    ///
    /// # Returns
    ///
    /// * `Ok(AccessReceipt)` - The controller answered with a 2xx status
    /// * `Err(AccessError::NotLoggedIn)` - No such user
    /// * `Err(AccessError::RoleNotAllowed)` - The user holds the blocked role; nothing is sent
    /// * `Err(AccessError::UpstreamHttpError)` - The controller answered with another status
    /// * `Err(AccessError::UpstreamUnreachable)` - The request could not be delivered
    pub async fn open_door(&self, user_id: UserId) -> DomainResult<AccessReceipt> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AccessError::NotLoggedIn)?;

        if user.has_role(self.config.blocked_role) {
            tracing::warn!(
                user_id = %user.id,
                role = %self.config.blocked_role,
                event = "door_access_refused",
                "Door access refused for blocked role"
            );
            return Err(AccessError::RoleNotAllowed {
                role: self.config.blocked_role.to_string(),
            }
            .into());
        }

        let request = AccessRequest::new(&user.login, Utc::now(), self.config.site_offset);

        let status = self
            .door_opener
            .send_access_request(&request)
            .await
            .map_err(|message| {
                tracing::error!(
                    user_id = %user.id,
                    error = %message,
                    event = "door_unreachable",
                    "Door controller unreachable"
                );
                AccessError::UpstreamUnreachable { message }
            })?;

        if !(200..300).contains(&status) {
            tracing::error!(
                user_id = %user.id,
                status = status,
                event = "door_rejected",
                "Door controller answered with an error status"
            );
            return Err(AccessError::UpstreamHttpError { status }.into());
        }

        tracing::info!(
            user_id = %user.id,
            username = %request.username,
            hora = %request.hora,
            event = "door_opened",
            "Door opened"
        );

        Ok(AccessReceipt { request, status })
    }
}
