//! Manifest-tree traversal
//!
//! Produces the sequence of files under a manifests subtree, kept separate
//! from validation and restore so each consumer can be tested against a
//! plain directory fixture.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModelBakError, ModelBakResult};

/// All files under `dir`, recursively, in sorted order
pub fn manifest_files(dir: &Path) -> ModelBakResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// All files under `dir` as `(absolute, relative-to-dir)` pairs, sorted
///
/// Used by restore to mirror a backup's manifest subtree into the live
/// store at the corresponding relative locations.
pub fn walk_relative(dir: &Path) -> ModelBakResult<Vec<(PathBuf, PathBuf)>> {
    let files = manifest_files(dir)?;
    let mut pairs = Vec::with_capacity(files.len());
    for file in files {
        let relative = file
            .strip_prefix(dir)
            .map_err(|e| ModelBakError::Io(format!("path outside walk root: {}", e)))?
            .to_path_buf();
        pairs.push((file, relative));
    }
    Ok(pairs)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> ModelBakResult<()> {
    let entries = fs::read_dir(dir)
        .map_err(|e| ModelBakError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| ModelBakError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
