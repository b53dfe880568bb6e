//! Error types.
//!
//! Reads from the store never fail; only writing a snapshot back to
//! disk can produce an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write store snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite unreadable store snapshot {path}")]
    Unusable { path: PathBuf },

    #[error("Failed to encode store snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
