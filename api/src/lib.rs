//! HTTP surface for the Ghop door and phone verification services
//!
//! Exposed as a library so the integration tests can build the same app the
//! binary serves.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
