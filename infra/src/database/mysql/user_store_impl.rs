//! MySQL implementation of the UserRepository trait.
//!
//! Reads accounts from `{prefix}users` and keeps per-user attributes in
//! `{prefix}usermeta`, following the write semantics of WordPress'
//! `update_user_meta`: existing rows for a key are updated, otherwise a row is
//! inserted.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::{MySqlPool, Row};

use ghop_core::domain::entities::user::{User, UserId};
use ghop_core::domain::entities::user_meta::MetaKey;
use ghop_core::errors::DomainError;
use ghop_core::repositories::UserRepository;

use super::capabilities::parse_roles;
use crate::InfrastructureError;

// Table prefixes end up in SQL text, so they are restricted to identifier characters
static TABLE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]*$").unwrap());

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// MySQL implementation of UserRepository over the WordPress tables
pub struct MySqlUserStore {
    /// Database connection pool
    pool: MySqlPool,
    users_table: String,
    usermeta_table: String,
    capabilities_key: String,
}

impl MySqlUserStore {
    /// Create a store for tables named with `table_prefix` (usually `wp_`)
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Result<Self, InfrastructureError> {
        if !TABLE_PREFIX.is_match(table_prefix) {
            return Err(InfrastructureError::Config(format!(
                "Invalid table prefix: {}",
                table_prefix
            )));
        }

        Ok(Self {
            pool,
            users_table: format!("{}users", table_prefix),
            usermeta_table: format!("{}usermeta", table_prefix),
            capabilities_key: format!("{}capabilities", table_prefix),
        })
    }

    /// Build a user from its account row
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: u64 = row
            .try_get("ID")
            .map_err(|e| db_error("Failed to get ID", e))?;
        let login: String = row
            .try_get("user_login")
            .map_err(|e| db_error("Failed to get user_login", e))?;

        Ok(User::new(id, login))
    }
}

#[async_trait]
impl UserRepository for MySqlUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT ID, user_login FROM {} WHERE ID = ?",
            self.users_table
        );

        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut user = Self::row_to_user(&row)?;

        let profile_query = format!(
            "SELECT meta_key, meta_value FROM {} \
             WHERE user_id = ? AND meta_key IN ('first_name', 'last_name', 'nickname', ?) \
             ORDER BY umeta_id",
            self.usermeta_table
        );

        let rows = sqlx::query(&profile_query)
            .bind(id.value())
            .bind(&self.capabilities_key)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to load user profile", e))?;

        for row in rows {
            let key: String = row
                .try_get("meta_key")
                .map_err(|e| db_error("Failed to get meta_key", e))?;
            let value: Option<String> = row
                .try_get("meta_value")
                .map_err(|e| db_error("Failed to get meta_value", e))?;
            let value = value.unwrap_or_default();

            match key.as_str() {
                "first_name" => user.first_name = value,
                "last_name" => user.last_name = value,
                "nickname" if !value.is_empty() => user.nickname = value,
                key if key == self.capabilities_key => user.roles = parse_roles(&value),
                _ => {}
            }
        }

        Ok(Some(user))
    }

    async fn get_meta(&self, id: UserId, key: MetaKey) -> Result<Option<String>, DomainError> {
        let query = format!(
            "SELECT meta_value FROM {} WHERE user_id = ? AND meta_key = ? ORDER BY umeta_id LIMIT 1",
            self.usermeta_table
        );

        let row = sqlx::query(&query)
            .bind(id.value())
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to read user attribute", e))?;

        match row {
            Some(row) => row
                .try_get::<Option<String>, _>("meta_value")
                .map_err(|e| db_error("Failed to get meta_value", e)),
            None => Ok(None),
        }
    }

    async fn set_meta(&self, id: UserId, key: MetaKey, value: &str) -> Result<(), DomainError> {
        let exists_query = format!(
            "SELECT umeta_id FROM {} WHERE user_id = ? AND meta_key = ? LIMIT 1",
            self.usermeta_table
        );

        let existing = sqlx::query(&exists_query)
            .bind(id.value())
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check user attribute", e))?;

        let query = if existing.is_some() {
            format!(
                "UPDATE {} SET meta_value = ? WHERE user_id = ? AND meta_key = ?",
                self.usermeta_table
            )
        } else {
            format!(
                "INSERT INTO {} (meta_value, user_id, meta_key) VALUES (?, ?, ?)",
                self.usermeta_table
            )
        };

        sqlx::query(&query)
            .bind(value)
            .bind(id.value())
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to write user attribute", e))?;

        tracing::debug!(user_id = %id, key = %key, "User attribute written");
        Ok(())
    }

    async fn delete_meta(&self, id: UserId, key: MetaKey) -> Result<bool, DomainError> {
        let query = format!(
            "DELETE FROM {} WHERE user_id = ? AND meta_key = ?",
            self.usermeta_table
        );

        let result = sqlx::query(&query)
            .bind(id.value())
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete user attribute", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_meta(
        &self,
        key: MetaKey,
        value: &str,
        exclude: UserId,
    ) -> Result<u64, DomainError> {
        let query = format!(
            "SELECT COUNT(DISTINCT user_id) AS owners FROM {} \
             WHERE meta_key = ? AND meta_value = ? AND user_id <> ?",
            self.usermeta_table
        );

        let row = sqlx::query(&query)
            .bind(key.as_str())
            .bind(value)
            .bind(exclude.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count user attributes", e))?;

        let owners: i64 = row
            .try_get("owners")
            .map_err(|e| db_error("Failed to get owners", e))?;

        Ok(owners.max(0) as u64)
    }
}
