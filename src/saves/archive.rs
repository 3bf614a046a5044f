//! Save file decoding: gzip-compressed saves are inflated, plain saves pass through.

use crate::constants::GZIP_MAGIC;
use crate::error::ArchiveError;
use flate2::read::MultiGzDecoder;
use std::io::Read;
use std::path::Path;

pub fn is_gzipped(raw: &[u8]) -> bool {
    raw.starts_with(&GZIP_MAGIC)
}

/// Inflate `raw` when it carries the gzip magic, otherwise return it unchanged.
/// Concatenated gzip members are all inflated, in order.
/// The error is the raw inflate failure; [`decode`] attaches the path.
pub fn decode_bytes(raw: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
    if !is_gzipped(&raw) {
        return Ok(raw);
    }
    let mut out = Vec::with_capacity(raw.len() * 4);
    MultiGzDecoder::new(raw.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

/// Read one save file and return its decoded payload. Inflation runs on the blocking
/// pool so a large save does not hold up the async workers.
pub async fn decode(path: &Path) -> Result<Vec<u8>, ArchiveError> {
    let raw = tokio::fs::read(path).await.map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !is_gzipped(&raw) {
        return Ok(raw);
    }
    tokio::task::spawn_blocking(move || decode_bytes(raw))
        .await
        .map_err(|source| ArchiveError::Task {
            path: path.to_path_buf(),
            source,
        })?
        .map_err(|source| ArchiveError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}
