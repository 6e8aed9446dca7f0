//! blobtab Library
//!
//! A library for fetching CSV blobs from object storage into in-memory
//! tables, plus a small cyclic-delimiter string joiner.
//!
//! # Components
//!
//! - Remote CSV loader: list blobs by name prefix, download each one,
//!   decode, parse as CSV (chunked for oversized payloads) and concatenate
//!   the chunks into one [`Table`]
//! - Interleaver: join items with a repeating sequence of delimiter
//!   characters
//!
//! # Workspace Crates
//!
//! - `blobtab-store` - object storage abstraction (S3, local, in-memory)
//! - `blobtab-table` - the tabular data model
//!
//! # CLI Usage
//!
//! ```bash
//! # Fetch every CSV blob under a prefix into one table, printed as CSV
//! blobtab fetch --container reports --prefix daily_ \
//!   --access-key-id ... --secret-access-key ...
//!
//! # Same, served from a local directory tree instead of S3
//! blobtab fetch --local-root ./data --container reports --prefix daily_
//!
//! # Join items with a cycling delimiter sequence
//! blobtab join --delimiters "-+=" apple banana cherry date
//! ```

pub mod encoding;
pub mod error;
pub mod interleave;
pub mod loader;
mod parse;

pub use encoding::{DecodeError, Encoding};
pub use error::LoadError;
pub use interleave::{interleave_join, JoinError};
pub use loader::{
    load_csv_from_blobs, load_csv_prefix, LoadOptions, CHUNK_ROWS, CHUNK_THRESHOLD_BYTES,
};

// Re-export store and table types for convenience
pub use blobtab_store::{
    BlobRef, BlobStore, LocalStore, MemoryStore, S3Store, StoreCredentials, StoreError,
};
pub use blobtab_table::{Table, TableError, Value};
