//! CLI command handlers
//!
//! Bridges clap argument parsing with the core operations. Every handler
//! takes its parameters explicitly; nothing here prompts interactively.

pub mod backup;
pub mod catalog;
pub mod models;
pub mod restore;

pub use backup::handle_backup_command;
pub use catalog::{handle_list_command, handle_validate_command};
pub use models::handle_models_command;
pub use restore::handle_restore_command;
