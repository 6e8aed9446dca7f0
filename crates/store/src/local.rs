//! Local filesystem blob store implementation.
//!
//! Containers map to subdirectories of a root directory, blobs to the files
//! inside them.

use crate::{BlobRef, BlobStore, StoreError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Blob store backed by a local directory tree.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    async fn list_prefix(
        &self,
        container: &str,
        prefix: &str,
    ) -> Result<Vec<BlobRef>, StoreError> {
        let dir = self.root.join(container);

        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(dir.display().to_string())
            } else {
                StoreError::Io(err)
            }
        })?;

        let mut results = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;

            // Only include files, skip subdirectories
            if !metadata.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(prefix) {
                continue;
            }

            results.push(BlobRef {
                name,
                size: Some(metadata.len() as i64),
            });
        }

        // Directory iteration order is platform-dependent; sort by name so
        // listing order is deterministic
        results.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            "Listed {} blobs under prefix '{}' in {}",
            results.len(),
            prefix,
            dir.display()
        );

        Ok(results)
    }

    async fn fetch(&self, container: &str, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.root.join(container).join(name);

        tokio::fs::read(&path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(path.display().to_string())
            } else {
                StoreError::Io(err)
            }
        })
    }
}
