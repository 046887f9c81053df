//! Model name handling
//!
//! Ollama names models `namespace[:tag]`, e.g. `llama3:8b`. The tag defaults
//! to `latest` when omitted. The name determines both the manifest location
//! inside a store (`<namespace>/<tag>`) and the backup directory prefix
//! (`<namespace>-<tag>`).

use std::fmt;

use crate::error::{ModelBakError, ModelBakResult};

/// Tag used when a model name carries none
pub const DEFAULT_TAG: &str = "latest";

/// A model name split into namespace and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName {
    namespace: String,
    tag: String,
}

impl ModelName {
    /// Parse a `namespace[:tag]` string, defaulting the tag to `latest`
    pub fn parse(raw: &str) -> ModelBakResult<Self> {
        let (namespace, tag) = match raw.split_once(':') {
            Some((ns, tag)) => (ns, tag),
            None => (raw, DEFAULT_TAG),
        };

        if namespace.is_empty() || tag.is_empty() || tag.contains(':') {
            return Err(ModelBakError::InvalidModelName(raw.to_string()));
        }
        if namespace.contains('/') || namespace.contains('\\') || tag.contains('/') {
            return Err(ModelBakError::InvalidModelName(raw.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            tag: tag.to_string(),
        })
    }

    /// The namespace half (the directory under `library/`)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The tag half (the manifest filename)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Directory-safe form used to name backup sets (`namespace-tag`)
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.namespace, self.tag)
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.tag)
    }
}
