//! Remote CSV loading: list, fetch, decode, parse, concatenate.

use crate::encoding::Encoding;
use crate::error::LoadError;
use crate::parse::parse_csv_chunks;
use blobtab_store::{BlobStore, S3Store, StoreCredentials};
use blobtab_table::Table;
use tracing::{debug, info};

/// Decoded payloads above this size parse in bounded row chunks.
pub const CHUNK_THRESHOLD_BYTES: usize = 100 * 1024 * 1024;

/// Rows per chunk when chunked parsing is in effect.
pub const CHUNK_ROWS: usize = 1_000_000;

/// Configuration for a load call.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Character encoding of the blob content (default: UTF-8)
    pub encoding: Encoding,

    /// Whether the CSV has a header row (default: true)
    pub has_headers: bool,

    /// CSV field delimiter (default: ',')
    pub delimiter: u8,

    /// Decoded size above which chunked parsing kicks in
    pub chunk_threshold_bytes: usize,

    /// Rows per chunk during chunked parsing
    pub chunk_rows: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            has_headers: true,
            delimiter: b',',
            chunk_threshold_bytes: CHUNK_THRESHOLD_BYTES,
            chunk_rows: CHUNK_ROWS,
        }
    }
}

/// Load every CSV blob in `container` whose name starts with `prefix` into
/// one table.
///
/// Blobs download sequentially in listing order; each decodes and parses
/// into one or more chunks, and the chunks concatenate in discovery order.
/// Zero matching blobs is a valid outcome and yields an empty table.
pub async fn load_csv_prefix(
    store: &dyn BlobStore,
    container: &str,
    prefix: &str,
    options: &LoadOptions,
) -> Result<Table, LoadError> {
    let blobs = store.list_prefix(container, prefix).await?;

    if blobs.is_empty() {
        info!("No blobs matched prefix '{prefix}' in container '{container}'");
        return Ok(Table::empty());
    }

    debug!("Matched {} blobs under prefix '{prefix}'", blobs.len());

    let mut chunks = Vec::new();
    for blob in &blobs {
        let bytes = store.fetch(container, &blob.name).await?;
        let text = options.encoding.decode(&bytes)?;
        let parsed = parse_csv_chunks(&text, options)?;

        debug!(
            "Parsed {} chunks from blob '{}' ({} bytes)",
            parsed.len(),
            blob.name,
            bytes.len()
        );

        chunks.extend(parsed);
    }

    let table = Table::concat(chunks)?;

    info!(
        "Loaded {} rows x {} columns from {} blobs in '{container}'",
        table.num_rows(),
        table.num_columns(),
        blobs.len()
    );

    Ok(table)
}

/// Connect to S3 with an explicit credential bundle and load every CSV blob
/// under `prefix` in `container`.
pub async fn load_csv_from_blobs(
    credentials: &StoreCredentials,
    container: &str,
    prefix: &str,
    options: &LoadOptions,
) -> Result<Table, LoadError> {
    let store = S3Store::connect(credentials).await?;
    load_csv_prefix(&store, container, prefix, options).await
}
