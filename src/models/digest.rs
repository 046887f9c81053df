//! Content digest codec
//!
//! A digest is the content-addressed key for a blob, written `algorithm:hex`
//! in manifests and `algorithm-hex` on disk. Two blobs with the same digest
//! are assumed byte-identical; that assumption is only re-checked when hash
//! verification is requested during validation.

use std::fmt;

use crate::error::{ModelBakError, ModelBakResult};

/// Hex length of a sha256 digest
const SHA256_HEX_LEN: usize = 64;

/// A parsed content digest (`algorithm:hex`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest {
    algorithm: String,
    hex: String,
}

impl Digest {
    /// Parse a raw `algorithm:hex` string
    ///
    /// Rejects strings without a `:` separator, empty halves, unknown
    /// algorithms, uppercase or non-hex characters, and a wrong hex length
    /// for the algorithm. The algorithm half must not contain `-` or `/` so
    /// that [`Digest::to_filename`] stays collision-free.
    pub fn parse(raw: &str) -> ModelBakResult<Self> {
        let (algorithm, hex) = raw
            .split_once(':')
            .ok_or_else(|| ModelBakError::malformed_digest(raw, "missing ':' separator"))?;

        if algorithm.is_empty() {
            return Err(ModelBakError::malformed_digest(raw, "empty algorithm"));
        }
        if hex.is_empty() {
            return Err(ModelBakError::malformed_digest(raw, "empty hex component"));
        }
        if algorithm.contains('-') || algorithm.contains('/') {
            return Err(ModelBakError::malformed_digest(
                raw,
                "algorithm contains a path or filename separator",
            ));
        }
        if algorithm != "sha256" {
            return Err(ModelBakError::malformed_digest(
                raw,
                format!("unsupported algorithm '{}'", algorithm),
            ));
        }
        if hex.len() != SHA256_HEX_LEN {
            return Err(ModelBakError::malformed_digest(
                raw,
                format!("expected {} hex characters, got {}", SHA256_HEX_LEN, hex.len()),
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)) {
            return Err(ModelBakError::malformed_digest(
                raw,
                "hex component contains non-lowercase-hex characters",
            ));
        }

        Ok(Self {
            algorithm: algorithm.to_string(),
            hex: hex.to_string(),
        })
    }

    /// The hash algorithm name (currently always `sha256`)
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The hex component, used as the expected checksum during verification
    pub fn expected_hex(&self) -> &str {
        &self.hex
    }

    /// The on-disk blob filename for this digest (`:` replaced with `-`)
    ///
    /// The mapping is injective over accepted digests because `parse`
    /// rejects algorithms containing `-`. Filenames are never parsed back
    /// into digests, only compared by string equality.
    pub fn to_filename(&self) -> String {
        format!("{}-{}", self.algorithm, self.hex)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}
