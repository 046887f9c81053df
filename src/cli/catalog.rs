//! `list` and `validate` commands over existing backup sets

use std::path::{Path, PathBuf};

use crate::backup::{describe, discover, sort_by_size, summarize, validate, CatalogEntry};
use crate::display::{format_backup_table, format_statistics, format_validation_report};
use crate::error::ModelBakResult;

/// Handle the `list` command: statistics plus a size-sorted table
pub fn handle_list_command(backup_root: &Path) -> ModelBakResult<()> {
    let sets = discover(backup_root)?;

    let summary = summarize(&sets)?;
    println!("{}", format_statistics(&summary));
    println!();

    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(sets.len());
    for set in &sets {
        entries.push(describe(set)?);
    }
    sort_by_size(&mut entries);

    println!("{}", format_backup_table(&entries));
    println!("Note: only structure and blob presence are checked here; run 'modelbak validate --hashes' for integrity.");

    Ok(())
}

/// Handle the `validate` command
///
/// Prints a full report per set and returns whether every set passed, so
/// the caller can map failure to a non-zero exit code.
pub fn handle_validate_command(backups: &[PathBuf], hashes: bool) -> ModelBakResult<bool> {
    let mut all_passing = true;

    for (i, backup) in backups.iter().enumerate() {
        let report = validate(backup, hashes)?;
        print!("{}", format_validation_report(&report));
        all_passing &= report.is_passing();
        if i + 1 < backups.len() {
            println!();
        }
    }

    Ok(all_passing)
}
