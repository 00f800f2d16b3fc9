//! Task lifecycle management for Taskboard.
//!
//! This module implements the task core: creating tasks with a sequential
//! display identifier, listing the most recent incomplete tasks, and marking
//! tasks complete. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
