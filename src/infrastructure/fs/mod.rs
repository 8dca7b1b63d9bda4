//! File System Helpers
//!
//! Staging directories and tree relocation.

mod relocate;
mod staging;

pub use relocate::{copy_tree, move_path, persist_published, remove_path};
pub use staging::StagingArea;
