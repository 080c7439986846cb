//! Step definitions for task list lifecycle scenarios.

mod when;
pub mod world;
