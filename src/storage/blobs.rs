//! Blob store accessor
//!
//! Resolves digests to blob files within a store root and copies blobs
//! between stores. Blobs are immutable; they are only ever copied, never
//! modified in place.

use std::fs;

use crate::config::StorePaths;
use crate::error::{ModelBakError, ModelBakResult};
use crate::models::Digest;

/// Whether the blob for `digest` exists in `store`
pub fn blob_exists(store: &StorePaths, digest: &Digest) -> bool {
    store.blob_path(digest).is_file()
}

/// Copy the blob for `digest` from `src` into `dst`, creating the
/// destination blobs directory if absent
///
/// Returns the number of bytes copied. Fails with `BlobCopy` when the source
/// blob is missing or the copy fails; callers treat that as a per-item
/// warning and continue with the next digest. Permissions are preserved by
/// the underlying copy; timestamps are not.
pub fn copy_blob(src: &StorePaths, dst: &StorePaths, digest: &Digest) -> ModelBakResult<u64> {
    let src_path = src.blob_path(digest);
    if !src_path.is_file() {
        return Err(ModelBakError::blob_copy(
            digest.to_string(),
            format!("source blob missing: {}", src_path.display()),
        ));
    }

    let dst_dir = dst.blobs_dir();
    fs::create_dir_all(&dst_dir).map_err(|e| {
        ModelBakError::blob_copy(
            digest.to_string(),
            format!("failed to create {}: {}", dst_dir.display(), e),
        )
    })?;

    let dst_path = dst.blob_path(digest);
    fs::copy(&src_path, &dst_path).map_err(|e| {
        ModelBakError::blob_copy(
            digest.to_string(),
            format!(
                "copy {} -> {} failed: {}",
                src_path.display(),
                dst_path.display(),
                e
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn digest_of(byte: char) -> Digest {
        let hex: String = std::iter::repeat(byte).take(64).collect();
        Digest::parse(&format!("sha256:{}", hex)).unwrap()
    }

    fn store_with_blob(digest: &Digest, content: &[u8]) -> (StorePaths, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = StorePaths::new(temp.path());
        fs::create_dir_all(store.blobs_dir()).unwrap();
        fs::write(store.blob_path(digest), content).unwrap();
        (store, temp)
    }

    #[test]
    fn test_blob_exists() {
        let digest = digest_of('a');
        let (store, _temp) = store_with_blob(&digest, b"payload");

        assert!(blob_exists(&store, &digest));
        assert!(!blob_exists(&store, &digest_of('b')));
    }

    #[test]
    fn test_copy_blob_creates_destination_dir() {
        let digest = digest_of('a');
        let (src, _src_temp) = store_with_blob(&digest, b"payload");

        let dst_temp = TempDir::new().unwrap();
        let dst = StorePaths::new(dst_temp.path());
        assert!(!dst.blobs_dir().exists());

        let copied = copy_blob(&src, &dst, &digest).unwrap();
        assert_eq!(copied, 7);
        assert_eq!(fs::read(dst.blob_path(&digest)).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_blob_overwrites_existing() {
        let digest = digest_of('a');
        let (src, _src_temp) = store_with_blob(&digest, b"new content");
        let (dst, _dst_temp) = store_with_blob(&digest, b"stale");

        copy_blob(&src, &dst, &digest).unwrap();
        assert_eq!(fs::read(dst.blob_path(&digest)).unwrap(), b"new content");
    }

    #[test]
    fn test_copy_blob_missing_source() {
        let src_temp = TempDir::new().unwrap();
        let dst_temp = TempDir::new().unwrap();
        let src = StorePaths::new(src_temp.path());
        let dst = StorePaths::new(dst_temp.path());

        let err = copy_blob(&src, &dst, &digest_of('a')).unwrap_err();
        assert!(matches!(err, ModelBakError::BlobCopy { .. }));
        assert!(err.is_per_item());
    }
}
