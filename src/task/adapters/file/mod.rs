//! File-backed adapters.
//!
//! Filesystem access goes through capability handles (`cap-std`), so the
//! store can only touch the directory it was opened on.

mod io;
mod store;

pub use io::{open_parent_dir, read_file, write_file};
pub use store::FileTaskStore;
