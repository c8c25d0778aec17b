//! MySQL implementations over the WordPress schema

pub mod capabilities;
pub mod user_store_impl;

pub use capabilities::parse_roles;
pub use user_store_impl::MySqlUserStore;
