//! Configuration for the door access service

use chrono::{FixedOffset, Offset, Utc};
use ghop_shared::config::DoorConfig;

use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult};

/// Configuration for the door access service
#[derive(Debug, Clone)]
pub struct DoorAccessConfig {
    /// Holders of this role are refused
    pub blocked_role: Role,
    /// Site offset used for the `hora` field; fixed, so it does not follow DST
    pub site_offset: FixedOffset,
    /// Address shown to refused users
    pub contact_email: String,
}

impl Default for DoorAccessConfig {
    fn default() -> Self {
        Self {
            blocked_role: Role::Contributor,
            site_offset: Utc.fix(),
            contact_email: "hola@ghop.es".to_string(),
        }
    }
}

impl DoorAccessConfig {
    /// Build from loaded settings
    pub fn from_settings(settings: &DoorConfig) -> DomainResult<Self> {
        let blocked_role = settings
            .blocked_role
            .parse::<Role>()
            .map_err(|message| DomainError::Validation { message })?;

        let site_offset = settings
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| DomainError::Validation {
                message: format!(
                    "UTC offset out of range: {} minutes",
                    settings.utc_offset_minutes
                ),
            })?;

        Ok(Self {
            blocked_role,
            site_offset,
            contact_email: settings.contact_email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = DoorConfig {
            utc_offset_minutes: 120,
            ..DoorConfig::default()
        };
        let config = DoorAccessConfig::from_settings(&settings).unwrap();

        assert_eq!(config.blocked_role, Role::Contributor);
        assert_eq!(config.site_offset.local_minus_utc(), 7200);
        assert_eq!(config.contact_email, "hola@ghop.es");
    }

    #[test]
    fn test_from_settings_rejects_bad_offset() {
        let settings = DoorConfig {
            utc_offset_minutes: 24 * 60,
            ..DoorConfig::default()
        };
        assert!(DoorAccessConfig::from_settings(&settings).is_err());
    }

    #[test]
    fn test_from_settings_rejects_overflowing_offset() {
        for minutes in [i32::MAX, i32::MIN] {
            let settings = DoorConfig {
                utc_offset_minutes: minutes,
                ..DoorConfig::default()
            };
            assert!(DoorAccessConfig::from_settings(&settings).is_err());
        }
    }
}
