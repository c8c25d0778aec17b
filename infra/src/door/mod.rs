//! Door controller client

pub mod http_door;

pub use http_door::HttpDoorOpener;
