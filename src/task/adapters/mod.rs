//! Adapter implementations for task tracker ports.

pub mod file;
pub mod memory;
pub mod notify;
