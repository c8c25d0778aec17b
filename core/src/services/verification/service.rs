//! Main phone verification service implementation

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use ghop_shared::utils::phone::{has_valid_shape, mask_phone_number, normalize_phone};

use crate::domain::entities::user::{User, UserId};
use crate::domain::entities::user_meta::{is_truthy, MetaKey, META_TRUE};
use crate::domain::entities::verification_code::OtpCode;
use crate::domain::value_objects::VerificationState;
use crate::errors::{DomainResult, VerificationError};
use crate::repositories::UserRepository;

use super::config::PhoneVerificationConfig;
use super::message::render_message;
use super::traits::SmsGatewayTrait;
use super::types::SendCodeResult;

/// Phone verification service for site accounts
///
/// All state lives in three per-user attributes of the user store: the phone
/// number (`mobile`), the pending code (`mobile_verify_code`) and the
/// verified flag (`mobile_verified`).
pub struct PhoneVerificationService<U: UserRepository, S: SmsGatewayTrait> {
    /// User store holding accounts and their attributes
    user_repository: Arc<U>,
    /// SMS gateway used to deliver codes
    sms_gateway: Arc<S>,
    /// Service configuration
    config: PhoneVerificationConfig,
}

impl<U: UserRepository, S: SmsGatewayTrait> PhoneVerificationService<U, S> {
    /// Create a new phone verification service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - User store implementation
    /// * `sms_gateway` - SMS gateway implementation
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        sms_gateway: Arc<S>,
        config: PhoneVerificationConfig,
    ) -> Self {
        Self {
            user_repository,
            sms_gateway,
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &PhoneVerificationConfig {
        &self.config
    }

    /// Canonical form of a phone number: its digits with a leading `+`
    pub fn normalize_phone(raw: &str) -> String {
        normalize_phone(raw)
    }

    /// Check a normalized phone number before it is stored for `exclude_user`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The number has a usable shape and no other user owns it
    /// * `Err(VerificationError::InvalidPhone)` - Shorter than five characters or no leading `+`
    /// * `Err(VerificationError::PhoneDuplicated)` - Another user already stores it
    pub async fn validate_phone(&self, phone: &str, exclude_user: UserId) -> DomainResult<()> {
        if !has_valid_shape(phone) {
            return Err(VerificationError::InvalidPhone {
                phone: mask_phone_number(phone),
            }
            .into());
        }

        let owners = self
            .user_repository
            .count_by_meta(MetaKey::Mobile, phone, exclude_user)
            .await?;

        if owners > 0 {
            tracing::warn!(
                user_id = %exclude_user,
                phone = %mask_phone_number(phone),
                event = "phone_duplicated",
                "Phone number already registered by another user"
            );
            return Err(VerificationError::PhoneDuplicated.into());
        }

        Ok(())
    }

    /// Stored phone number of a user, if any
    pub async fn get_user_phone(&self, user_id: UserId) -> DomainResult<Option<String>> {
        let phone = self
            .user_repository
            .get_meta(user_id, MetaKey::Mobile)
            .await?;

        Ok(phone.filter(|value| !value.is_empty()))
    }

    /// Overwrite the stored phone number of a user without any checks
    pub async fn set_user_phone(&self, user_id: UserId, phone: &str) -> DomainResult<()> {
        self.user_repository
            .set_meta(user_id, MetaKey::Mobile, phone)
            .await
    }

    /// Normalize, validate and store a phone number entered by the user
    ///
    /// Storing a different number drops the verified flag, so the new number
    /// has to be confirmed with a code. Returns the normalized number that
    /// was stored.
    pub async fn register_phone(&self, user_id: UserId, raw_phone: &str) -> DomainResult<String> {
        self.require_user(user_id).await?;

        let phone = normalize_phone(raw_phone);
        self.validate_phone(&phone, user_id).await?;

        let previous = self.get_user_phone(user_id).await?;
        self.set_user_phone(user_id, &phone).await?;

        if previous.as_deref() != Some(phone.as_str())
            && self
                .user_repository
                .delete_meta(user_id, MetaKey::MobileVerified)
                .await?
        {
            tracing::info!(
                user_id = %user_id,
                event = "phone_verification_reset",
                "Phone number changed, verification required again"
            );
        }

        tracing::info!(
            user_id = %user_id,
            phone = %mask_phone_number(&phone),
            event = "phone_registered",
            "Phone number stored"
        );

        Ok(phone)
    }

    /// Generate a fresh code and store it as the user's pending code
    ///
    /// A previously pending code is overwritten.
    pub async fn generate_code_for_user(&self, user_id: UserId) -> DomainResult<OtpCode> {
        let code = OtpCode::generate();

        self.user_repository
            .set_meta(user_id, MetaKey::MobileVerifyCode, &code.to_string())
            .await?;

        Ok(code)
    }

    /// Issue a new code and send it by SMS
    ///
    /// This method:
    /// 1. Looks the user up
    /// 2. Resolves the destination: `phone` when given, otherwise the stored number
    /// 3. Stores a new code, replacing any pending one
    /// 4. Renders the message template and hands it to the gateway
    ///
    /// The stored code is kept when delivery fails.
    pub async fn send_verification_code(
        &self,
        user_id: UserId,
        phone: Option<&str>,
    ) -> DomainResult<SendCodeResult> {
        let user = self.require_user(user_id).await?;

        let phone = match phone.filter(|value| !value.is_empty()) {
            Some(phone) => phone.to_string(),
            None => self
                .get_user_phone(user.id)
                .await?
                .ok_or(VerificationError::NoPhoneOnFile)?,
        };

        let code = self.generate_code_for_user(user.id).await?;
        let message = render_message(&self.config.message_template, code, &user);

        if !self.sms_gateway.is_available() {
            tracing::error!(
                user_id = %user.id,
                event = "sms_gateway_unavailable",
                "No SMS gateway configured, verification code not sent"
            );
            return Err(VerificationError::GatewayUnavailable {
                reason: "no SMS provider configured".to_string(),
            }
            .into());
        }

        let message_id = self
            .sms_gateway
            .send_sms(&phone, &message)
            .await
            .map_err(|reason| {
                tracing::error!(
                    user_id = %user.id,
                    phone = %mask_phone_number(&phone),
                    error = %reason,
                    event = "sms_send_failed",
                    "Failed to send verification code"
                );
                VerificationError::GatewayUnavailable { reason }
            })?;

        tracing::info!(
            user_id = %user.id,
            phone = %mask_phone_number(&phone),
            message_id = %message_id,
            event = "verification_code_sent",
            "Verification code sent"
        );

        Ok(SendCodeResult {
            phone,
            message_id,
            sent_at: Utc::now(),
        })
    }

    /// Issue and send a code, reporting only whether it went out
    pub async fn start_verification(&self, user_id: UserId, phone: Option<&str>) -> bool {
        match self.send_verification_code(user_id, phone).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    event = "verification_not_started",
                    "Verification could not be started"
                );
                false
            }
        }
    }

    /// Compare a submitted code with the pending one without consuming it
    ///
    /// A missing or unparsable stored value never matches.
    pub async fn validate_code(&self, user_id: UserId, submitted: OtpCode) -> DomainResult<bool> {
        let stored = self
            .user_repository
            .get_meta(user_id, MetaKey::MobileVerifyCode)
            .await?
            .and_then(|value| value.parse::<OtpCode>().ok());

        Ok(match stored {
            Some(stored) => constant_time_eq(
                stored.to_string().as_bytes(),
                submitted.to_string().as_bytes(),
            ),
            None => false,
        })
    }

    /// Confirm a submitted code
    ///
    /// On a match the pending code is deleted and the user is marked verified.
    /// A mismatch changes nothing.
    pub async fn verify_code(&self, user_id: UserId, submitted: OtpCode) -> DomainResult<()> {
        if !self.validate_code(user_id, submitted).await? {
            tracing::warn!(
                user_id = %user_id,
                event = "verification_failed",
                "Verification code mismatch"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        self.user_repository
            .delete_meta(user_id, MetaKey::MobileVerifyCode)
            .await?;
        self.user_repository
            .set_meta(user_id, MetaKey::MobileVerified, META_TRUE)
            .await?;

        tracing::info!(
            user_id = %user_id,
            event = "phone_verified",
            "Phone number verified"
        );

        Ok(())
    }

    /// Confirm a submitted code, reporting only whether it matched
    pub async fn verify(&self, user_id: UserId, submitted: OtpCode) -> bool {
        match self.verify_code(user_id, submitted).await {
            Ok(()) => true,
            Err(e) if e.is_internal() => {
                tracing::error!(
                    user_id = %user_id,
                    error = %e,
                    event = "verification_store_error",
                    "Could not complete verification"
                );
                false
            }
            Err(_) => false,
        }
    }

    /// Whether the verified flag is set for a user
    pub async fn is_verified(&self, user_id: UserId) -> DomainResult<bool> {
        let flag = self
            .user_repository
            .get_meta(user_id, MetaKey::MobileVerified)
            .await?;

        Ok(flag.as_deref().map(is_truthy).unwrap_or(false))
    }

    /// Where the user stands in the verification dialog
    pub async fn verification_state(&self, user_id: UserId) -> DomainResult<VerificationState> {
        let verified = self.is_verified(user_id).await?;
        let pending = self
            .user_repository
            .get_meta(user_id, MetaKey::MobileVerifyCode)
            .await?
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        Ok(VerificationState::from_attributes(verified, pending))
    }

    /// Policy check with store failures surfaced to the caller
    pub async fn check_needs_verification(&self, user_id: UserId) -> DomainResult<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let Some(user) = self.user_repository.find_by_id(user_id).await? else {
            return Ok(false);
        };

        if !user.has_role(self.config.required_role) {
            return Ok(false);
        }

        Ok(!self.is_verified(user.id).await?)
    }

    /// Whether the user must verify a phone before using the site
    ///
    /// True only when the feature is enabled, the user exists, holds the
    /// required role and is not yet verified. When the store cannot be read
    /// the user is treated as unverified.
    pub async fn needs_verification(&self, user_id: UserId) -> bool {
        match self.check_needs_verification(user_id).await {
            Ok(needed) => needed,
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    error = %e,
                    event = "verification_policy_error",
                    "Could not evaluate verification policy"
                );
                self.config.enabled
            }
        }
    }

    async fn require_user(&self, user_id: UserId) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| VerificationError::UserNotFound.into())
    }
}
