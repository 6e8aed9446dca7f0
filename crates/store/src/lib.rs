//! Object storage abstraction for reading blobs from S3, local directories,
//! or an in-memory store.
//!
//! This crate provides a unified interface for listing blobs by name prefix
//! and fetching their content.
//!
//! # Store Types
//!
//! - **S3**: containers are buckets, blobs are objects
//! - **Local**: containers are subdirectories of a root, blobs are files
//! - **Memory**: containers and blobs held in memory, for tests and fixtures
//!
//! # Example
//!
//! ```ignore
//! use blobtab_store::{BlobStore, S3Store, StoreCredentials};
//!
//! let store = S3Store::connect(&credentials).await?;
//! for blob in store.list_prefix("my-container", "reports/").await? {
//!     let bytes = store.fetch("my-container", &blob.name).await?;
//!     // Process bytes...
//! }
//! ```

mod error;
mod local;
mod memory;
mod s3;

use async_trait::async_trait;

pub use error::StoreError;
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use s3::{S3Store, StoreCredentials};

/// A named blob discovered by a prefix listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    /// Blob name within its container
    pub name: String,
    /// Content length in bytes, when the store reports one
    pub size: Option<i64>,
}

/// A read-only object store holding named byte blobs grouped in containers.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// List every blob in `container` whose name starts with `prefix`,
    /// in the store's listing order. Zero matches is not an error.
    async fn list_prefix(&self, container: &str, prefix: &str)
        -> Result<Vec<BlobRef>, StoreError>;

    /// Fetch the full content of one blob.
    async fn fetch(&self, container: &str, name: &str) -> Result<Vec<u8>, StoreError>;
}
