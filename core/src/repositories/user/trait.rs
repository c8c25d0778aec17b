//! User-attribute store interface.
//!
//! The store owns user records and a key-value bag of attributes per user.
//! Services only read user records and read/write the attributes named by
//! [`MetaKey`]; how they are persisted is up to the implementation.

use async_trait::async_trait;

use crate::domain::entities::user::{User, UserId};
use crate::domain::entities::user_meta::MetaKey;
use crate::errors::DomainError;

/// Repository trait for user records and their attributes
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ghop_core::domain::entities::{MetaKey, User, UserId};
/// use ghop_core::errors::DomainError;
/// use ghop_core::repositories::UserRepository;
///
/// struct NullStore;
///
/// #[async_trait]
/// impl UserRepository for NullStore {
///     async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///     async fn get_meta(&self, _id: UserId, _key: MetaKey) -> Result<Option<String>, DomainError> {
///         Ok(None)
///     }
///     async fn set_meta(&self, _id: UserId, _key: MetaKey, _value: &str) -> Result<(), DomainError> {
///         Ok(())
///     }
///     async fn delete_meta(&self, _id: UserId, _key: MetaKey) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn count_by_meta(
///         &self,
///         _key: MetaKey,
///         _value: &str,
///         _exclude: UserId,
///     ) -> Result<u64, DomainError> {
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that ID
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Read one attribute; `None` when it was never set or was deleted
    async fn get_meta(&self, id: UserId, key: MetaKey) -> Result<Option<String>, DomainError>;

    /// Create or overwrite one attribute
    async fn set_meta(&self, id: UserId, key: MetaKey, value: &str) -> Result<(), DomainError>;

    /// Remove one attribute
    ///
    /// # Returns
    /// * `Ok(true)` - The attribute existed and was removed
    /// * `Ok(false)` - Nothing to remove
    async fn delete_meta(&self, id: UserId, key: MetaKey) -> Result<bool, DomainError>;

    /// Count users other than `exclude` whose attribute `key` equals `value`
    /// exactly
    ///
    /// Used for uniqueness pre-checks; it does not lock anything, so a
    /// concurrent writer may still store the same value afterwards.
    async fn count_by_meta(&self, key: MetaKey, value: &str, exclude: UserId) -> Result<u64, DomainError>;
}
