//! Request bodies accepted by the API

pub mod phone;

pub use phone::{SendCodeRequest, VerifyCodeRequest};
