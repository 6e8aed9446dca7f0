//! The loader's error set.

use crate::encoding::DecodeError;
use blobtab_store::StoreError;
use blobtab_table::TableError;
use thiserror::Error;

/// Errors that can occur during a load call.
///
/// Each failure cause has its own kind so callers can distinguish them
/// programmatically; nothing is collapsed into a catch-all.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Listing or fetching from the store failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Blob bytes were not valid in the requested encoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The decoded text was not well-formed CSV.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Parsed chunks could not be combined.
    #[error("table error: {0}")]
    Table(#[from] TableError),
}
