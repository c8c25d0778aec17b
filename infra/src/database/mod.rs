//! Database module - user attribute stores
//!
//! This module provides the user store implementations:
//! - Connection pool management for MySQL
//! - The WordPress `users`/`usermeta` backed store
//! - A process-local store for development and tests
//! - An enum picking one of them from configuration

pub mod connection;
pub mod memory;
pub mod mysql;
pub mod store;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use memory::{InMemoryUserStore, SeedUser};
pub use mysql::MySqlUserStore;
pub use store::UserStore;
