//! Door route handlers

pub mod open;

pub use open::{open_door, DOOR_OPENED_MESSAGE};
