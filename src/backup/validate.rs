//! Backup-set validation
//!
//! The validator is the single source of truth for whether a backup set is
//! restorable. It is strictly read-only and exhaustive: every manifest and
//! every digest is checked so the report describes the whole set, not just
//! the first problem.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest as Sha2Digest, Sha256};

use crate::config::StorePaths;
use crate::error::{ModelBakError, ModelBakResult};
use crate::models::{Digest, Manifest};
use crate::storage::{blob_exists, manifest_files};

/// A blob whose content does not hash to its declared digest
#[derive(Debug, Clone)]
pub struct HashMismatch {
    /// The digest whose blob failed verification
    pub digest: Digest,
    /// Hex the manifest declares
    pub expected: String,
    /// Hex the blob content actually hashes to
    pub actual: String,
}

/// A manifest inside a backup set that could not be used
#[derive(Debug, Clone)]
pub struct ManifestProblem {
    /// Path of the offending manifest file
    pub path: PathBuf,
    /// Why it could not be used
    pub reason: String,
}

/// Exhaustive result of validating one backup set
#[derive(Debug)]
pub struct ValidationReport {
    /// The backup set this report describes
    pub backup_root: PathBuf,
    /// Whether the manifests subtree and blobs directory both exist
    pub structurally_valid: bool,
    /// Manifests that could not be read, parsed, or digest-extracted
    pub manifest_problems: Vec<ManifestProblem>,
    /// Digests whose blob file is absent (deduplicated, discovery order)
    pub missing_blobs: Vec<Digest>,
    /// Digests whose blob content failed hash verification
    pub hash_mismatches: Vec<HashMismatch>,
    /// Digests whose blob content passed hash verification
    pub verified_ok: Vec<Digest>,
    /// Whether hash verification was requested
    pub hashes_verified: bool,
}

impl ValidationReport {
    fn new(backup_root: &Path, hashes_verified: bool) -> Self {
        Self {
            backup_root: backup_root.to_path_buf(),
            structurally_valid: true,
            manifest_problems: Vec::new(),
            missing_blobs: Vec::new(),
            hash_mismatches: Vec::new(),
            verified_ok: Vec::new(),
            hashes_verified,
        }
    }

    /// Whether any referenced blob is absent
    pub fn has_missing_blob(&self) -> bool {
        !self.missing_blobs.is_empty()
    }

    /// Whether the set is restorable: structurally valid, every manifest
    /// usable, no missing blob, and no mismatch among verified hashes
    pub fn is_passing(&self) -> bool {
        self.structurally_valid
            && self.manifest_problems.is_empty()
            && self.missing_blobs.is_empty()
            && self.hash_mismatches.is_empty()
    }
}

/// Validate one backup set
///
/// Structure is checked first; a set missing its manifests subtree or blobs
/// directory is reported structurally invalid and no further checks run.
/// Otherwise every manifest under the subtree is loaded and every referenced
/// digest is checked for blob presence. With `verify_hashes`, blobs of each
/// manifest whose digest set is complete are stream-hashed and compared
/// case-insensitively against their declared hex.
pub fn validate(backup_root: &Path, verify_hashes: bool) -> ModelBakResult<ValidationReport> {
    let store = StorePaths::new(backup_root);
    let mut report = ValidationReport::new(backup_root, verify_hashes);

    if !store.has_store_layout() {
        report.structurally_valid = false;
        return Ok(report);
    }

    for manifest_path in manifest_files(&store.manifest_registry())? {
        let digests = match load_digests(&manifest_path) {
            Ok(digests) => digests,
            Err(e) => {
                report.manifest_problems.push(ManifestProblem {
                    path: manifest_path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let mut set_complete = true;
        for digest in &digests {
            if !blob_exists(&store, digest) {
                set_complete = false;
                if !report.missing_blobs.contains(digest) {
                    report.missing_blobs.push(digest.clone());
                }
            }
        }

        // Hashes are only worth checking when every blob of this manifest
        // is present; an incomplete set already fails.
        if verify_hashes && set_complete {
            for digest in &digests {
                match hash_blob(&store.blob_path(digest)) {
                    Ok(actual) if actual.eq_ignore_ascii_case(digest.expected_hex()) => {
                        report.verified_ok.push(digest.clone());
                    }
                    Ok(actual) => {
                        report.hash_mismatches.push(HashMismatch {
                            digest: digest.clone(),
                            expected: digest.expected_hex().to_string(),
                            actual,
                        });
                    }
                    Err(e) => {
                        report.hash_mismatches.push(HashMismatch {
                            digest: digest.clone(),
                            expected: digest.expected_hex().to_string(),
                            actual: format!("<unreadable: {}>", e),
                        });
                    }
                }
            }
        }
    }

    Ok(report)
}

fn load_digests(path: &Path) -> ModelBakResult<Vec<Digest>> {
    Manifest::load(path)?.digests()
}

/// Stream-hash a blob file with sha256, returning lowercase hex
fn hash_blob(path: &Path) -> ModelBakResult<String> {
    let mut file = File::open(path)
        .map_err(|e| ModelBakError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .map_err(|e| ModelBakError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sha256_hex(content: &[u8]) -> String {
        Sha256::digest(content)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Build a backup set holding one manifest that references `blobs`,
    /// writing each blob whose content is `Some`
    fn fixture_set(blobs: &[(&str, Option<&[u8]>)]) -> (TempDir, Vec<Digest>) {
        let temp = TempDir::new().unwrap();
        let store = StorePaths::new(temp.path());

        let model_dir = store.manifest_registry().join("alpha");
        fs::create_dir_all(&model_dir).unwrap();
        fs::create_dir_all(store.blobs_dir()).unwrap();

        let mut digests = Vec::new();
        let mut layers = Vec::new();
        for (i, (hex, content)) in blobs.iter().enumerate() {
            let digest = Digest::parse(&format!("sha256:{}", hex)).unwrap();
            if let Some(content) = content {
                fs::write(store.blob_path(&digest), content).unwrap();
            }
            if i > 0 {
                layers.push(format!(r#"{{"digest": "{}"}}"#, digest));
            }
            digests.push(digest);
        }

        let manifest = format!(
            r#"{{"config": {{"digest": "{}"}}, "layers": [{}]}}"#,
            digests[0],
            layers.join(","),
        );
        fs::write(model_dir.join("7b"), manifest).unwrap();

        (temp, digests)
    }

    #[test]
    fn test_structurally_invalid_without_blobs_dir() {
        let temp = TempDir::new().unwrap();
        let store = StorePaths::new(temp.path());
        fs::create_dir_all(store.manifest_registry()).unwrap();

        let report = validate(temp.path(), false).unwrap();
        assert!(!report.structurally_valid);
        assert!(!report.is_passing());
        // Structural failure halts further checks
        assert!(report.missing_blobs.is_empty());
    }

    #[test]
    fn test_complete_set_passes() {
        let content = b"config blob";
        let hex = sha256_hex(content);
        let (temp, _) = fixture_set(&[(&hex, Some(content))]);

        let report = validate(temp.path(), false).unwrap();
        assert!(report.structurally_valid);
        assert!(report.is_passing());
    }

    #[test]
    fn test_missing_blob_is_exhaustive() {
        let a = sha256_hex(b"aaa");
        let b = sha256_hex(b"bbb");
        let c = sha256_hex(b"ccc");
        // b's blob is absent; a and c are present
        let (temp, digests) =
            fixture_set(&[(&a, Some(b"aaa")), (&b, None), (&c, Some(b"ccc"))]);

        let report = validate(temp.path(), false).unwrap();
        assert!(report.structurally_valid);
        assert!(report.has_missing_blob());
        assert_eq!(report.missing_blobs, vec![digests[1].clone()]);
        assert!(!report.is_passing());
    }

    #[test]
    fn test_hash_verification_passes_on_matching_content() {
        let content = b"verified payload";
        let hex = sha256_hex(content);
        let (temp, _) = fixture_set(&[(&hex, Some(content))]);

        let report = validate(temp.path(), true).unwrap();
        assert!(report.is_passing());
        assert_eq!(report.verified_ok.len(), 1);
        assert!(report.hash_mismatches.is_empty());
    }

    #[test]
    fn test_hash_verification_reports_expected_and_actual() {
        let content = b"original content";
        let hex = sha256_hex(content);
        // One byte flipped relative to the declared digest
        let (temp, digests) = fixture_set(&[(&hex, Some(b"Original content"))]);

        let report = validate(temp.path(), true).unwrap();
        assert!(!report.is_passing());
        assert_eq!(report.hash_mismatches.len(), 1);

        let mismatch = &report.hash_mismatches[0];
        assert_eq!(mismatch.digest, digests[0]);
        assert_eq!(mismatch.expected, hex);
        assert_eq!(mismatch.actual, sha256_hex(b"Original content"));
        assert_ne!(mismatch.expected, mismatch.actual);
    }

    #[test]
    fn test_mismatch_does_not_stop_remaining_digests() {
        let good = b"good layer";
        let bad_declared = sha256_hex(b"what it should be");
        let (temp, _) = fixture_set(&[
            (&sha256_hex(good), Some(good)),
            (&bad_declared, Some(b"what it actually is")),
        ]);

        let report = validate(temp.path(), true).unwrap();
        // Both digests were examined: one ok, one mismatch
        assert_eq!(report.verified_ok.len(), 1);
        assert_eq!(report.hash_mismatches.len(), 1);
    }

    #[test]
    fn test_hashes_skipped_for_incomplete_manifest() {
        let present = b"present";
        let (temp, _) = fixture_set(&[
            (&sha256_hex(present), Some(present)),
            (&sha256_hex(b"absent"), None),
        ]);

        let report = validate(temp.path(), true).unwrap();
        assert!(report.has_missing_blob());
        // No hash work on a set already known incomplete
        assert!(report.verified_ok.is_empty());
        assert!(report.hash_mismatches.is_empty());
    }

    #[test]
    fn test_unparseable_manifest_recorded_and_continues() {
        let content = b"blob";
        let hex = sha256_hex(content);
        let (temp, _) = fixture_set(&[(&hex, Some(content))]);

        // Drop a second, broken manifest next to the good one
        let store = StorePaths::new(temp.path());
        let other_dir = store.manifest_registry().join("beta");
        fs::create_dir_all(&other_dir).unwrap();
        fs::write(other_dir.join("latest"), "{broken").unwrap();

        let report = validate(temp.path(), false).unwrap();
        assert_eq!(report.manifest_problems.len(), 1);
        assert!(!report.is_passing());
        // The good manifest was still fully checked
        assert!(report.missing_blobs.is_empty());
    }

    #[test]
    fn test_validator_never_mutates_the_set() {
        let content = b"blob";
        let hex = sha256_hex(content);
        let (temp, digests) = fixture_set(&[(&hex, Some(content))]);
        let store = StorePaths::new(temp.path());
        let before = fs::read(store.blob_path(&digests[0])).unwrap();

        validate(temp.path(), true).unwrap();

        assert_eq!(fs::read(store.blob_path(&digests[0])).unwrap(), before);
        assert_eq!(manifest_files(&store.manifest_registry()).unwrap().len(), 1);
    }
}
