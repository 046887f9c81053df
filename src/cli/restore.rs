//! `restore` command: merge backup sets back into a live store

use std::path::PathBuf;

use crate::backup::{restore_backup, validate};
use crate::config::StorePaths;
use crate::display::format_validation_report;
use crate::error::ModelBakResult;

/// Handle the `restore` command
///
/// Each set is validated first (existence-only unless `hashes`). Passing
/// sets are restored; failing ones are skipped unless `include_invalid`.
/// The destination defaults to the live store from `OLLAMA_MODELS` when no
/// explicit path was given.
pub fn handle_restore_command(
    backups: &[PathBuf],
    dest: Option<PathBuf>,
    hashes: bool,
    include_invalid: bool,
) -> ModelBakResult<()> {
    let dest = match dest {
        Some(path) => path,
        None => StorePaths::from_env()?.root().to_path_buf(),
    };

    let mut skipped = Vec::new();

    for backup in backups {
        println!("Processing backup: {}", backup.display());
        let report = validate(backup, hashes)?;
        print!("{}", format_validation_report(&report));

        if !report.is_passing() && !include_invalid {
            skipped.push(backup.clone());
            println!("Skipped (failed validation).");
            println!();
            continue;
        }

        println!("Restoring into {} ...", dest.display());
        let outcome = restore_backup(backup, &dest)?;
        for warning in &outcome.warnings {
            println!("Warning: {}", warning);
        }
        println!("{}", outcome.summary());
        println!();
    }

    if !skipped.is_empty() {
        println!("The following backups were skipped due to validation errors:");
        for backup in &skipped {
            println!("  - {}", backup.display());
        }
        println!("Re-run with --include-invalid to attempt them anyway.");
    }

    Ok(())
}
