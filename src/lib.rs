//! Taskboard: a minimal task-tracking REST service.
//!
//! The service exposes three operations over HTTP: create a task, list the
//! five most recent incomplete tasks, and mark a task complete.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values and transitions with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete port implementations (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle core (domain, ports, adapters, services)
//! - [`http`]: axum transport adapter mapping the lifecycle API to REST
//! - [`config`]: layered server configuration

pub mod config;
pub mod http;
pub mod task;
