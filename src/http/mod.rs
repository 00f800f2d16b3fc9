//! HTTP transport adapter for the task lifecycle service.
//!
//! Translates REST requests and responses to and from the lifecycle API:
//!
//! - DTO shapes in [`dto`]
//! - Central domain-failure-to-status mapping in [`error`]
//! - Router, handlers, and server bootstrap in [`routes`]

pub mod dto;
pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{SharedService, router, start_server};
