//! Unit tests for domain entities

mod user_tests;
