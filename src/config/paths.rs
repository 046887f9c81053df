//! Store path schema
//!
//! Both the live Ollama store and every backup set share the same layout:
//!
//! ```text
//! <root>/manifests/registry.ollama.ai/library/<namespace>/<tag>
//! <root>/blobs/<algorithm>-<hex>
//! ```
//!
//! The layout must stay bit-exact with what Ollama writes, so every path is
//! built through this module and pinned by its tests.
//!
//! ## Live store resolution
//!
//! The live store root comes from the `OLLAMA_MODELS` environment variable.
//! Its absence is a fatal configuration error for any operation touching the
//! live store.

use std::path::{Path, PathBuf};

use crate::error::{ModelBakError, ModelBakResult};
use crate::models::{Digest, ModelName};

/// Environment variable naming the live store root
pub const LIVE_STORE_ENV: &str = "OLLAMA_MODELS";

/// Registry directory under `manifests/`
pub const REGISTRY_DIR: &str = "registry.ollama.ai";

/// Library directory under the registry
pub const LIBRARY_DIR: &str = "library";

/// Default directory for new backup sets
pub const DEFAULT_BACKUP_ROOT: &str = "ModelBakup";

/// Path helper for one store root (live store or backup set)
#[derive(Debug, Clone)]
pub struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    /// Wrap an explicit store root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the live store from the `OLLAMA_MODELS` environment variable
    pub fn from_env() -> ModelBakResult<Self> {
        let root = std::env::var(LIVE_STORE_ENV).map_err(|_| {
            ModelBakError::Config(format!(
                "{} environment variable not set",
                LIVE_STORE_ENV
            ))
        })?;
        Ok(Self::new(root))
    }

    /// The store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/manifests/registry.ollama.ai/library`
    pub fn manifest_registry(&self) -> PathBuf {
        self.root
            .join("manifests")
            .join(REGISTRY_DIR)
            .join(LIBRARY_DIR)
    }

    /// `<root>/manifests`
    pub fn manifests_dir(&self) -> PathBuf {
        self.root.join("manifests")
    }

    /// Directory holding a model's manifest file: `<registry>/<namespace>`
    pub fn model_manifest_dir(&self, name: &ModelName) -> PathBuf {
        self.manifest_registry().join(name.namespace())
    }

    /// A model's manifest file: `<registry>/<namespace>/<tag>`
    pub fn model_manifest(&self, name: &ModelName) -> PathBuf {
        self.model_manifest_dir(name).join(name.tag())
    }

    /// `<root>/blobs`
    pub fn blobs_dir(&self) -> PathBuf {
        self.root.join("blobs")
    }

    /// A blob file: `<root>/blobs/<algorithm>-<hex>`
    pub fn blob_path(&self, digest: &Digest) -> PathBuf {
        self.blobs_dir().join(digest.to_filename())
    }

    /// Whether this root has the expected manifests/blobs structure
    pub fn has_store_layout(&self) -> bool {
        self.manifest_registry().is_dir() && self.blobs_dir().is_dir()
    }
}

/// Compute a fresh backup-set root for a model under `backup_parent`
///
/// The directory name is `<namespace-tag>__<YYYYmmdd_HHMMSS>`. Second-level
/// timestamp resolution plus the model name is the de facto uniqueness key;
/// collisions are not otherwise guarded.
pub fn new_backup_root(backup_parent: &Path, name: &ModelName) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    backup_parent.join(format!("{}__{}", name.dir_name(), stamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(byte: char) -> String {
        std::iter::repeat(byte).take(64).collect()
    }

    #[test]
    fn test_manifest_path_schema() {
        let store = StorePaths::new("/data/ollama");
        let name = ModelName::parse("llama3:8b").unwrap();

        assert_eq!(
            store.model_manifest(&name),
            PathBuf::from("/data/ollama/manifests/registry.ollama.ai/library/llama3/8b")
        );
    }

    #[test]
    fn test_blob_path_schema() {
        let store = StorePaths::new("/data/ollama");
        let digest = Digest::parse(&format!("sha256:{}", hex_of('a'))).unwrap();

        assert_eq!(
            store.blob_path(&digest),
            PathBuf::from(format!("/data/ollama/blobs/sha256-{}", hex_of('a')))
        );
    }

    #[test]
    fn test_registry_path() {
        let store = StorePaths::new("/s");
        assert_eq!(
            store.manifest_registry(),
            PathBuf::from("/s/manifests/registry.ollama.ai/library")
        );
    }

    // StorePaths::from_env is covered at process level in tests/cli.rs,
    // where each invocation gets its own environment.

    #[test]
    fn test_backup_root_name() {
        let name = ModelName::parse("alpha:7b").unwrap();
        let root = new_backup_root(Path::new("/backups"), &name);
        let dir = root.file_name().unwrap().to_string_lossy().to_string();

        assert!(dir.starts_with("alpha-7b__"));
        // namespace-tag plus "__" plus YYYYmmdd_HHMMSS
        assert_eq!(dir.len(), "alpha-7b".len() + 2 + 15);
    }
}
