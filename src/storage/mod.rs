//! Filesystem access for stores
//!
//! - `blobs`: resolve digests to blob files, existence checks, copies
//! - `walk`: manifest-subtree traversal, separated from its consumers

pub mod blobs;
pub mod walk;

pub use blobs::{blob_exists, copy_blob};
pub use walk::{manifest_files, walk_relative};
