//! Configuration and path management

pub mod paths;

pub use paths::{new_backup_root, StorePaths, DEFAULT_BACKUP_ROOT, LIVE_STORE_ENV};
