//! Backup catalog
//!
//! Discovers backup sets under a root directory, aggregates statistics
//! across them, and derives a read-only display entry per set. Entries are
//! computed on demand and never persisted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StorePaths;
use crate::error::{ModelBakError, ModelBakResult};
use crate::backup::validate::validate;

/// Aggregate statistics across discovered backup sets
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Number of backup sets
    pub backup_count: usize,
    /// Blob files across all sets
    pub blob_files: usize,
    /// Total bytes of all blob files
    pub total_bytes: u64,
}

/// Derived, read-only view of one backup set
#[derive(Debug)]
pub struct CatalogEntry {
    /// The backup set directory
    pub path: PathBuf,
    /// Its directory name (model + timestamp)
    pub folder_name: String,
    /// Model name taken from the manifests subtree, or `Unknown`
    pub model_name: String,
    /// Parameter/variant label (the tag directory entry), or `Unknown`
    pub parameters: String,
    /// Total bytes in the set's blobs directory
    pub total_bytes: u64,
    /// Whether the expected directory layout is present
    pub structure_ok: bool,
    /// Whether any manifest-referenced blob is absent
    pub missing_blob: bool,
}

impl CatalogEntry {
    /// Whether the set should be flagged in listings
    pub fn is_problematic(&self) -> bool {
        !self.structure_ok || self.missing_blob
    }
}

/// Discover backup sets under `root`
///
/// A backup set is an immediate subdirectory with both the registry
/// manifests path and a blobs directory. Fails with `NoValidBackups` when
/// the root is missing or nothing qualifies.
pub fn discover(root: &Path) -> ModelBakResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ModelBakError::NoValidBackups(root.to_path_buf()));
    }

    let mut sets = Vec::new();
    let entries = fs::read_dir(root)
        .map_err(|e| ModelBakError::Io(format!("Failed to read {}: {}", root.display(), e)))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| ModelBakError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_dir() && StorePaths::new(&path).has_store_layout() {
            sets.push(path);
        }
    }

    if sets.is_empty() {
        return Err(ModelBakError::NoValidBackups(root.to_path_buf()));
    }

    sets.sort();
    Ok(sets)
}

/// Aggregate blob statistics across `sets`
pub fn summarize(sets: &[PathBuf]) -> ModelBakResult<CatalogSummary> {
    let mut summary = CatalogSummary {
        backup_count: sets.len(),
        ..Default::default()
    };

    for set in sets {
        let (files, bytes) = blob_stats(&StorePaths::new(set).blobs_dir())?;
        summary.blob_files += files;
        summary.total_bytes += bytes;
    }

    Ok(summary)
}

/// Derive the display entry for one backup set
///
/// The missing-blob flag delegates to the validator in existence-only mode
/// (no hash verification).
pub fn describe(path: &Path) -> ModelBakResult<CatalogEntry> {
    let store = StorePaths::new(path);
    let structure_ok = store.has_store_layout();

    let folder_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let total_bytes = if store.blobs_dir().is_dir() {
        blob_stats(&store.blobs_dir())?.1
    } else {
        0
    };

    let (mut model_name, mut parameters) = ("Unknown".to_string(), "Unknown".to_string());
    let mut missing_blob = false;

    if structure_ok {
        if let Some((name, params)) = model_info(&store.manifest_registry())? {
            model_name = name;
            parameters = params;
        }

        let report = validate(path, false)?;
        missing_blob = report.has_missing_blob() || !report.manifest_problems.is_empty();
    }

    Ok(CatalogEntry {
        path: path.to_path_buf(),
        folder_name,
        model_name,
        parameters,
        total_bytes,
        structure_ok,
        missing_blob,
    })
}

/// Stable sort for display: total backup size, descending
pub fn sort_by_size(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| b.total_bytes.cmp(&a.total_bytes));
}

/// First model directory under the registry path and its first child entry
fn model_info(registry: &Path) -> ModelBakResult<Option<(String, String)>> {
    let model_dir = first_entry(registry)?;
    let Some(model_dir) = model_dir else {
        return Ok(None);
    };
    let model_name = name_of(&model_dir);

    let parameters = match first_entry(&model_dir)? {
        Some(child) => name_of(&child),
        None => "Unknown".to_string(),
    };

    Ok(Some((model_name, parameters)))
}

fn first_entry(dir: &Path) -> ModelBakResult<Option<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| ModelBakError::Io(format!("Failed to read {}: {}", dir.display(), e)))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Ok(entries.into_iter().next())
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn blob_stats(blobs_dir: &Path) -> ModelBakResult<(usize, u64)> {
    let mut files = 0;
    let mut bytes = 0;

    let entries = fs::read_dir(blobs_dir).map_err(|e| {
        ModelBakError::Io(format!("Failed to read {}: {}", blobs_dir.display(), e))
    })?;
    for entry in entries {
        let entry = entry
            .map_err(|e| ModelBakError::Io(format!("Failed to read directory entry: {}", e)))?;
        let metadata = entry
            .metadata()
            .map_err(|e| ModelBakError::Io(format!("Failed to stat blob: {}", e)))?;
        if metadata.is_file() {
            files += 1;
            bytes += metadata.len();
        }
    }

    Ok((files, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Create a well-formed backup set directory under `root`
    fn make_set(root: &Path, dir: &str, model: &str, tag: &str, blobs: &[(&str, &[u8])]) -> PathBuf {
        let set = root.join(dir);
        let store = StorePaths::new(&set);

        let model_dir = store.manifest_registry().join(model);
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(model_dir.join(tag), r#"{"config": {}, "layers": []}"#).unwrap();

        fs::create_dir_all(store.blobs_dir()).unwrap();
        for (name, content) in blobs {
            fs::write(store.blobs_dir().join(name), content).unwrap();
        }

        set
    }

    #[test]
    fn test_discover_excludes_malformed_sets() {
        let temp = TempDir::new().unwrap();
        let good = make_set(temp.path(), "good__1", "alpha", "7b", &[("sha256-a", b"x")]);

        // A directory missing its blobs folder does not qualify
        let bad = temp.path().join("bad__1");
        fs::create_dir_all(
            StorePaths::new(&bad).manifest_registry(),
        )
        .unwrap();

        let sets = discover(temp.path()).unwrap();
        assert_eq!(sets, vec![good]);
    }

    #[test]
    fn test_discover_empty_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = discover(temp.path()).unwrap_err();
        assert!(matches!(err, ModelBakError::NoValidBackups(_)));
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        assert!(discover(&temp.path().join("absent")).is_err());
    }

    #[test]
    fn test_summarize_aggregates_all_sets() {
        let temp = TempDir::new().unwrap();
        make_set(temp.path(), "a__1", "alpha", "7b", &[("sha256-a", b"12345")]);
        make_set(
            temp.path(),
            "b__1",
            "beta",
            "latest",
            &[("sha256-b", b"123"), ("sha256-c", b"4567")],
        );

        let sets = discover(temp.path()).unwrap();
        let summary = summarize(&sets).unwrap();

        assert_eq!(summary.backup_count, 2);
        assert_eq!(summary.blob_files, 3);
        assert_eq!(summary.total_bytes, 12);
    }

    #[test]
    fn test_describe_extracts_model_and_parameters() {
        let temp = TempDir::new().unwrap();
        let set = make_set(temp.path(), "alpha-7b__x", "alpha", "7b", &[("sha256-a", b"xy")]);

        let entry = describe(&set).unwrap();
        assert_eq!(entry.model_name, "alpha");
        assert_eq!(entry.parameters, "7b");
        assert_eq!(entry.folder_name, "alpha-7b__x");
        assert_eq!(entry.total_bytes, 2);
        assert!(entry.structure_ok);
    }

    #[test]
    fn test_describe_flags_missing_blobs() {
        let temp = TempDir::new().unwrap();
        let hex: String = std::iter::repeat('a').take(64).collect();
        let set = temp.path().join("set__1");
        let store = StorePaths::new(&set);
        let model_dir = store.manifest_registry().join("alpha");
        fs::create_dir_all(&model_dir).unwrap();
        fs::create_dir_all(store.blobs_dir()).unwrap();
        fs::write(
            model_dir.join("7b"),
            format!(r#"{{"config": {{"digest": "sha256:{}"}}, "layers": []}}"#, hex),
        )
        .unwrap();

        let entry = describe(&set).unwrap();
        assert!(entry.structure_ok);
        assert!(entry.missing_blob);
        assert!(entry.is_problematic());
    }

    #[test]
    fn test_describe_structurally_invalid_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("not-a-set");
        fs::create_dir_all(&dir).unwrap();

        let entry = describe(&dir).unwrap();
        assert!(!entry.structure_ok);
        assert!(entry.is_problematic());
        assert_eq!(entry.model_name, "Unknown");
    }

    #[test]
    fn test_sort_by_size_descending_and_stable() {
        let temp = TempDir::new().unwrap();
        make_set(temp.path(), "small__1", "a", "t", &[("sha256-a", b"1")]);
        make_set(temp.path(), "big__1", "b", "t", &[("sha256-b", b"123456")]);
        make_set(temp.path(), "mid__1", "c", "t", &[("sha256-c", b"123")]);

        let sets = discover(temp.path()).unwrap();
        let mut entries: Vec<CatalogEntry> =
            sets.iter().map(|s| describe(s).unwrap()).collect();
        sort_by_size(&mut entries);

        let sizes: Vec<u64> = entries.iter().map(|e| e.total_bytes).collect();
        assert_eq!(sizes, vec![6, 3, 1]);
    }
}
