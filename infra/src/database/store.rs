//! User store selected from configuration

use async_trait::async_trait;

use ghop_core::domain::entities::user::{User, UserId};
use ghop_core::domain::entities::user_meta::MetaKey;
use ghop_core::errors::DomainError;
use ghop_core::repositories::UserRepository;
use ghop_shared::config::{DatabaseConfig, UserStoreBackend};

use super::connection::DatabasePool;
use super::memory::InMemoryUserStore;
use super::mysql::MySqlUserStore;
use crate::InfrastructureError;

/// The configured user store backend
pub enum UserStore {
    MySql(MySqlUserStore),
    Memory(InMemoryUserStore),
}

impl UserStore {
    /// Open the backend named by `config.backend`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        match config.backend {
            UserStoreBackend::Mysql => {
                let pool = DatabasePool::new(config).await?;
                let store = MySqlUserStore::new(pool.get_pool().clone(), &config.table_prefix)?;
                tracing::info!(prefix = %config.table_prefix, "Using MySQL user store");
                Ok(UserStore::MySql(store))
            }
            UserStoreBackend::Memory => {
                let store = match &config.seed_file {
                    Some(path) => InMemoryUserStore::from_seed_file(path)?,
                    None => InMemoryUserStore::new(),
                };
                tracing::warn!("Using in-memory user store; data is lost on restart");
                Ok(UserStore::Memory(store))
            }
        }
    }

    /// Name of the backend for logs and health output
    pub fn backend_name(&self) -> &'static str {
        match self {
            UserStore::MySql(_) => "mysql",
            UserStore::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        match self {
            UserStore::MySql(store) => store.find_by_id(id).await,
            UserStore::Memory(store) => store.find_by_id(id).await,
        }
    }

    async fn get_meta(&self, id: UserId, key: MetaKey) -> Result<Option<String>, DomainError> {
        match self {
            UserStore::MySql(store) => store.get_meta(id, key).await,
            UserStore::Memory(store) => store.get_meta(id, key).await,
        }
    }

    async fn set_meta(&self, id: UserId, key: MetaKey, value: &str) -> Result<(), DomainError> {
        match self {
            UserStore::MySql(store) => store.set_meta(id, key, value).await,
            UserStore::Memory(store) => store.set_meta(id, key, value).await,
        }
    }

    async fn delete_meta(&self, id: UserId, key: MetaKey) -> Result<bool, DomainError> {
        match self {
            UserStore::MySql(store) => store.delete_meta(id, key).await,
            UserStore::Memory(store) => store.delete_meta(id, key).await,
        }
    }

    async fn count_by_meta(
        &self,
        key: MetaKey,
        value: &str,
        exclude: UserId,
    ) -> Result<u64, DomainError> {
        match self {
            UserStore::MySql(store) => store.count_by_meta(key, value, exclude).await,
            UserStore::Memory(store) => store.count_by_meta(key, value, exclude).await,
        }
    }
}
