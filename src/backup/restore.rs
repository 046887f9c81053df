//! Backup restoration
//!
//! Merges a backup set into a live store: the manifests subtree is mirrored
//! recursively and the blobs directory is flat-copied. Destination files are
//! unconditionally overwritten (last-write-wins, no content comparison).
//! Each failed file copy is a warning; processing continues.
//!
//! Restore does not validate the set itself. Callers decide whether to
//! restore only validated sets or also attempt invalid ones.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StorePaths;
use crate::error::{ModelBakError, ModelBakResult};
use crate::storage::walk_relative;

/// Result of one restore operation
#[derive(Debug, Default)]
pub struct RestoreOutcome {
    /// Manifest files copied into the live store
    pub manifests_copied: usize,
    /// Blob files copied into the live store
    pub blobs_copied: usize,
    /// Per-file problems encountered
    pub warnings: Vec<String>,
}

impl RestoreOutcome {
    /// Whether every file in the backup made it across
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// One-line summary for terminal reporting
    pub fn summary(&self) -> String {
        format!(
            "Restored {} manifest file(s) and {} blob(s){}",
            self.manifests_copied,
            self.blobs_copied,
            if self.warnings.is_empty() {
                String::new()
            } else {
                format!(", {} warning(s)", self.warnings.len())
            }
        )
    }
}

/// Restore one backup set into the live store rooted at `live_root`
pub fn restore_backup(backup_root: &Path, live_root: &Path) -> ModelBakResult<RestoreOutcome> {
    let backup = StorePaths::new(backup_root);
    let live = StorePaths::new(live_root);
    let mut outcome = RestoreOutcome::default();

    // Manifests: mirror the whole subtree at the same relative locations.
    let backup_manifests = backup.manifests_dir();
    if backup_manifests.is_dir() {
        for (src, relative) in walk_relative(&backup_manifests)? {
            let dest = live.manifests_dir().join(&relative);
            match copy_file(&src, &dest) {
                Ok(()) => outcome.manifests_copied += 1,
                Err(e) => outcome.warnings.push(e.to_string()),
            }
        }
    } else {
        outcome
            .warnings
            .push(format!("No manifests directory in {}", backup_root.display()));
    }

    // Blobs: flat copy, no subdirectory structure.
    let backup_blobs = backup.blobs_dir();
    if backup_blobs.is_dir() {
        let entries = fs::read_dir(&backup_blobs).map_err(|e| {
            ModelBakError::Io(format!("Failed to read {}: {}", backup_blobs.display(), e))
        })?;
        for entry in entries {
            let entry = entry
                .map_err(|e| ModelBakError::Io(format!("Failed to read directory entry: {}", e)))?;
            let src = entry.path();
            if !src.is_file() {
                continue;
            }
            let dest = file_in(&live.blobs_dir(), &src)?;
            match copy_file(&src, &dest) {
                Ok(()) => outcome.blobs_copied += 1,
                Err(e) => outcome.warnings.push(e.to_string()),
            }
        }
    } else {
        outcome
            .warnings
            .push(format!("No blobs directory in {}", backup_root.display()));
    }

    Ok(outcome)
}

/// Copy `src` to `dest`, creating parent directories, overwriting `dest`
fn copy_file(src: &Path, dest: &Path) -> ModelBakResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ModelBakError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    fs::copy(src, dest).map_err(|e| {
        ModelBakError::Io(format!(
            "Failed copying {} to {}: {}",
            src.display(),
            dest.display(),
            e
        ))
    })?;
    Ok(())
}

fn file_in(dir: &Path, src: &Path) -> ModelBakResult<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| ModelBakError::Io(format!("No filename in {}", src.display())))?;
    Ok(dir.join(name))
}
