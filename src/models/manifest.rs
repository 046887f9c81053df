//! Manifest reader
//!
//! A manifest is the JSON document Ollama writes per model version. It
//! references one config blob and an ordered list of layer blobs by digest.
//! Unrecognized fields are ignored; a missing `config.digest` or `layers`
//! array is a parse error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelBakError, ModelBakResult};
use crate::models::digest::Digest;

/// One digest-bearing entry in a manifest (`config` or a layer)
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Content digest in `algorithm:hex` form
    pub digest: String,
}

/// A parsed model manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// The config blob reference
    pub config: ManifestEntry,
    /// Layer blob references in document order
    pub layers: Vec<ManifestEntry>,
}

impl Manifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> ModelBakResult<Self> {
        let file = File::open(path)
            .map_err(|e| ModelBakError::manifest_parse(path, e.to_string()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| ModelBakError::manifest_parse(path, e.to_string()))
    }

    /// All digests referenced by this manifest: config first, then layers in
    /// document order
    ///
    /// The order only matters for progress output; validation treats the
    /// result as a set.
    pub fn digests(&self) -> ModelBakResult<Vec<Digest>> {
        let mut digests = Vec::with_capacity(self.layers.len() + 1);
        digests.push(Digest::parse(&self.config.digest)?);
        for layer in &self.layers {
            digests.push(Digest::parse(&layer.digest)?);
        }
        Ok(digests)
    }
}
