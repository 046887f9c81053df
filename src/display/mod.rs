//! Display formatting for terminal output
//!
//! Pure formatting: every function takes data and returns a `String`, so the
//! CLI handlers decide what to print and the formatters stay testable.

pub mod catalog;
pub mod models;
pub mod validation;

pub use catalog::{format_backup_table, format_statistics};
pub use models::format_model_list;
pub use validation::format_validation_report;

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Bytes as megabytes with two decimals, for the catalog table
pub(crate) fn size_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
