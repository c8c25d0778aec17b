//! Process-local user store
//!
//! Used for development without a WordPress database and in tests. Users can
//! be loaded from a JSON seed file:
//!
//! ```json
//! [
//!   {"id": 5, "login": "maria", "roles": ["subscriber"], "meta": {"mobile": "+34600111222"}}
//! ]
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

use ghop_core::domain::entities::user::{Role, User, UserId};
use ghop_core::domain::entities::user_meta::MetaKey;
use ghop_core::errors::DomainError;
use ghop_core::repositories::UserRepository;

use crate::InfrastructureError;

/// One account in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
    meta: RwLock<HashMap<(UserId, MetaKey), String>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `users` and no attributes
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
            meta: RwLock::new(HashMap::new()),
        }
    }

    /// Load a JSON seed file
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_seed_json(&content)?;

        tracing::info!(path = %path.display(), "User store seeded from file");
        Ok(store)
    }

    /// Parse seed users from a JSON array
    pub fn from_seed_json(json: &str) -> Result<Self, InfrastructureError> {
        let seeds: Vec<SeedUser> = serde_json::from_str(json)?;

        let mut users = HashMap::new();
        let mut meta = HashMap::new();

        for seed in seeds {
            let id = UserId(seed.id);

            let mut user = User::new(seed.id, seed.login).with_names(seed.first_name, seed.last_name);
            if let Some(nickname) = seed.nickname {
                user.nickname = nickname;
            }
            for role in &seed.roles {
                let role = role.parse::<Role>().map_err(InfrastructureError::Config)?;
                user = user.with_role(role);
            }

            for (key, value) in seed.meta {
                let key = key.parse::<MetaKey>().map_err(InfrastructureError::Config)?;
                meta.insert((id, key), value);
            }

            users.insert(id, user);
        }

        Ok(Self {
            users: RwLock::new(users),
            meta: RwLock::new(meta),
        })
    }

    /// Add or replace an account
    pub async fn insert_user(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Number of accounts
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_meta(&self, id: UserId, key: MetaKey) -> Result<Option<String>, DomainError> {
        Ok(self.meta.read().await.get(&(id, key)).cloned())
    }

    async fn set_meta(&self, id: UserId, key: MetaKey, value: &str) -> Result<(), DomainError> {
        self.meta.write().await.insert((id, key), value.to_string());
        Ok(())
    }

    async fn delete_meta(&self, id: UserId, key: MetaKey) -> Result<bool, DomainError> {
        Ok(self.meta.write().await.remove(&(id, key)).is_some())
    }

    async fn count_by_meta(
        &self,
        key: MetaKey,
        value: &str,
        exclude: UserId,
    ) -> Result<u64, DomainError> {
        let meta = self.meta.read().await;
        let owners = meta
            .iter()
            .filter(|((id, k), v)| *k == key && v.as_str() == value && *id != exclude)
            .count();
        Ok(owners as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": 5, "login": "maria", "first_name": "María", "roles": ["subscriber"],
         "meta": {"mobile": "+34600111222"}},
        {"id": 9, "login": "colab", "nickname": "Col", "roles": ["Contributor"]}
    ]"#;

    #[tokio::test]
    async fn test_seed_json() {
        let store = InMemoryUserStore::from_seed_json(SEED).unwrap();

        let maria = store.find_by_id(UserId(5)).await.unwrap().unwrap();
        assert_eq!(maria.first_name, "María");
        assert_eq!(maria.nickname, "maria");
        assert!(maria.has_role(Role::Subscriber));

        let colab = store.find_by_id(UserId(9)).await.unwrap().unwrap();
        assert_eq!(colab.nickname, "Col");
        assert!(colab.has_role(Role::Contributor));

        assert_eq!(
            store.get_meta(UserId(5), MetaKey::Mobile).await.unwrap().as_deref(),
            Some("+34600111222")
        );
        assert_eq!(store.user_count().await, 2);
    }

    #[test]
    fn test_seed_rejects_unknown_keys_and_roles() {
        let bad_key = r#"[{"id": 1, "login": "a", "meta": {"billing_phone": "1"}}]"#;
        assert!(matches!(
            InMemoryUserStore::from_seed_json(bad_key),
            Err(InfrastructureError::Config(_))
        ));

        let bad_role = r#"[{"id": 1, "login": "a", "roles": ["shop_manager"]}]"#;
        assert!(matches!(
            InMemoryUserStore::from_seed_json(bad_role),
            Err(InfrastructureError::Config(_))
        ));

        assert!(matches!(
            InMemoryUserStore::from_seed_json("{"),
            Err(InfrastructureError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let store = InMemoryUserStore::from_seed_file(file.path()).unwrap();
        assert_eq!(store.user_count().await, 2);

        assert!(matches!(
            InMemoryUserStore::from_seed_file("/nonexistent/ghop-seed.json"),
            Err(InfrastructureError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_meta_round_trip_and_count() {
        let store = InMemoryUserStore::with_users([User::new(5, "maria"), User::new(7, "joan")]);

        store.set_meta(UserId(5), MetaKey::Mobile, "+34600111222").await.unwrap();
        store.set_meta(UserId(7), MetaKey::Mobile, "+34600111222").await.unwrap();

        assert_eq!(
            store
                .count_by_meta(MetaKey::Mobile, "+34600111222", UserId(5))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            store
                .count_by_meta(MetaKey::Mobile, "+34600111222", UserId::NONE)
                .await
                .unwrap(),
            2
        );

        assert!(store.delete_meta(UserId(5), MetaKey::Mobile).await.unwrap());
        assert!(!store.delete_meta(UserId(5), MetaKey::Mobile).await.unwrap());
        assert_eq!(store.get_meta(UserId(5), MetaKey::Mobile).await.unwrap(), None);
    }
}
