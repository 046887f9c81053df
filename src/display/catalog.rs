//! Backup catalog formatting
//!
//! Renders the discovered backup sets as a fixed-column table plus an
//! aggregate statistics block.

use crate::backup::{CatalogEntry, CatalogSummary};
use crate::display::{format_size, size_mb};

/// Longest folder name shown before middle truncation kicks in
const FOLDER_WIDTH: usize = 33;

/// Format aggregate statistics across all discovered sets
pub fn format_statistics(summary: &CatalogSummary) -> String {
    format!(
        "Total backups available: {}\n\
         Total blob files across all backups: {}\n\
         Total size of all backups: {}",
        summary.backup_count,
        summary.blob_files,
        format_size(summary.total_bytes),
    )
}

/// Format the backup-set listing table
///
/// Expects entries already sorted for display (see
/// [`crate::backup::sort_by_size`]). The status column distinguishes a
/// structurally broken set from one that is merely missing blobs.
pub fn format_backup_table(entries: &[CatalogEntry]) -> String {
    if entries.is_empty() {
        return "No backups found.".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.model_name.len())
        .max()
        .unwrap_or(10)
        .max(10);
    let params_width = entries
        .iter()
        .map(|e| e.parameters.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<7}{:<name_width$}  {:>10}  {:<params_width$}  {:<8}  {}\n",
        "Index",
        "Model Name",
        "Size (MB)",
        "Params",
        "Status",
        "Folder",
        name_width = name_width,
        params_width = params_width,
    ));
    output.push_str(&"-".repeat(7 + name_width + params_width + 12 + 10 + FOLDER_WIDTH + 8));
    output.push('\n');

    for (idx, entry) in entries.iter().enumerate() {
        let status = if !entry.structure_ok {
            "INVALID"
        } else if entry.missing_blob {
            "MISSING"
        } else {
            "OK"
        };

        output.push_str(&format!(
            "[{:<4}] {:<name_width$}  {:>10.2}  {:<params_width$}  {:<8}  {}\n",
            idx,
            entry.model_name,
            size_mb(entry.total_bytes),
            entry.parameters,
            status,
            truncate_middle(&entry.folder_name, FOLDER_WIDTH),
            name_width = name_width,
            params_width = params_width,
        ));
    }

    if entries.iter().any(|e| e.is_problematic()) {
        output.push_str(
            "\nNote: sets marked INVALID or MISSING may be incomplete or corrupted.\n",
        );
    }

    output
}

/// Shorten a name beyond `width` by replacing its middle with `...`
///
/// Counts and cuts in characters, not bytes, so multibyte folder names
/// cannot split a character.
fn truncate_middle(name: &str, width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= width {
        return name.to_string();
    }
    let keep = (width - 3) / 2;
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}
