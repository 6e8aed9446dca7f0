//! In-memory blob store, for tests and fixtures.

use crate::{BlobRef, BlobStore, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

/// Blob store holding containers and blobs in memory.
///
/// Blobs within a container list in name order. A store built with
/// [`MemoryStore::failing`] rejects every operation with a connection
/// failure, which stands in for an unreachable endpoint or rejected
/// credentials.
#[derive(Debug, Default)]
pub struct MemoryStore {
    containers: HashMap<String, BTreeMap<String, Vec<u8>>>,
    failure: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that fails every operation with a connection error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            containers: HashMap::new(),
            failure: Some(message.into()),
        }
    }

    /// Add an empty container.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.containers.entry(container.into()).or_default();
        self
    }

    /// Add a blob, creating its container if needed.
    pub fn with_blob(
        mut self,
        container: impl Into<String>,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.containers
            .entry(container.into())
            .or_default()
            .insert(name.into(), bytes.into());
        self
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn list_prefix(
        &self,
        container: &str,
        prefix: &str,
    ) -> Result<Vec<BlobRef>, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Connect(message.clone()));
        }

        let blobs = self
            .containers
            .get(container)
            .ok_or_else(|| StoreError::NotFound(container.to_string()))?;

        Ok(blobs
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, bytes)| BlobRef {
                name: name.clone(),
                size: Some(bytes.len() as i64),
            })
            .collect())
    }

    async fn fetch(&self, container: &str, name: &str) -> Result<Vec<u8>, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Connect(message.clone()));
        }

        self.containers
            .get(container)
            .and_then(|blobs| blobs.get(name))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("{container}/{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_prefix_ordered() {
        let store = MemoryStore::new()
            .with_blob("c", "b.csv", "2")
            .with_blob("c", "a.csv", "1")
            .with_blob("c", "skip.csv", "3");

        let blobs = store.list_prefix("c", "").await.unwrap();
        let names: Vec<_> = blobs.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv", "skip.csv"]);

        let blobs = store.list_prefix("c", "a").await.unwrap();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].size, Some(1));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let store = MemoryStore::new().with_container("c");
        let err = store.fetch("c", "missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_container() {
        let store = MemoryStore::new();
        let err = store.list_prefix("nope", "").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MemoryStore::failing("bad credentials");
        let err = store.list_prefix("c", "").await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));

        let err = store.fetch("c", "a").await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));
    }
}
