//! Task state and lifecycle management.
//!
//! This module owns the task model, the ordered snapshot store, the
//! operations that create, edit, reorder and delete tasks, due-date
//! monitoring, and snapshot import/export. It follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Snapshot format in [`codec`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
