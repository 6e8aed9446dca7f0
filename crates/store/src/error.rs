//! Error types for object store operations.

use thiserror::Error;

/// Errors that can occur while listing or fetching blobs.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The container or blob does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The endpoint could not be reached or the credentials were rejected.
    #[error("connection or authentication failure: {0}")]
    Connect(String),

    /// The store accepted the request but failed to complete it.
    #[error("storage request failed: {0}")]
    Request(String),

    /// IO error from a local store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
