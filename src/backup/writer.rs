//! Backup-set creation
//!
//! Materializes a fresh, timestamped backup set for one model from the live
//! store: the manifest file plus every blob it references. The operation is
//! best-effort: each failed or missing blob is a warning, and only an
//! unparseable source manifest aborts (there is nothing to back up then).
//! The live store is never written to.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{new_backup_root, StorePaths};
use crate::error::{ModelBakError, ModelBakResult};
use crate::models::{Manifest, ModelName};
use crate::storage::copy_blob;

/// Result of one backup operation
#[derive(Debug)]
pub struct BackupOutcome {
    /// The model that was backed up
    pub model: ModelName,
    /// Root directory of the new backup set
    pub backup_root: PathBuf,
    /// Number of blobs copied into the set
    pub blobs_copied: usize,
    /// Total bytes of copied blobs
    pub bytes_copied: u64,
    /// Per-item problems encountered (missing blobs, failed copies)
    pub warnings: Vec<String>,
}

impl BackupOutcome {
    /// Whether every referenced file made it into the set
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Back up one model from `live` into a new set under `backup_parent`
pub fn backup_model(
    live: &StorePaths,
    model: &ModelName,
    backup_parent: &Path,
) -> ModelBakResult<BackupOutcome> {
    let backup_root = new_backup_root(backup_parent, model);
    let backup = StorePaths::new(&backup_root);

    let mut outcome = BackupOutcome {
        model: model.clone(),
        backup_root: backup_root.clone(),
        blobs_copied: 0,
        bytes_copied: 0,
        warnings: Vec::new(),
    };

    // The source manifest drives everything; it is re-read from the live
    // store below, so a failed copy of it is only a warning.
    let source_manifest = live.model_manifest(model);

    let manifest_dir = backup.model_manifest_dir(model);
    fs::create_dir_all(&manifest_dir).map_err(|e| {
        ModelBakError::Io(format!(
            "Failed to create {}: {}",
            manifest_dir.display(),
            e
        ))
    })?;

    let dest_manifest = backup.model_manifest(model);
    if let Err(e) = fs::copy(&source_manifest, &dest_manifest) {
        outcome.warnings.push(format!(
            "Failed to copy manifest {}: {}",
            source_manifest.display(),
            e
        ));
    }

    // Fatal when unparseable: no digest set means no backup.
    let manifest = Manifest::load(&source_manifest)?;
    let digests = manifest.digests()?;

    for digest in &digests {
        match copy_blob(live, &backup, digest) {
            Ok(bytes) => {
                outcome.blobs_copied += 1;
                outcome.bytes_copied += bytes;
            }
            Err(e) => outcome.warnings.push(e.to_string()),
        }
    }

    Ok(outcome)
}
