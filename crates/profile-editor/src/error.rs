//! Editor error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("metadata error: {0}")]
    Metadata(#[from] nostr::metadata::MetadataError),

    #[error("client error: {0}")]
    Client(#[from] nostr_client::ClientError),

    #[error("failed to read store {path}: {source}")]
    StoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write store {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid store contents in {path}: {source}")]
    StoreFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no signed-in public key")]
    MissingIdentity,
}

pub type Result<T> = std::result::Result<T, EditorError>;
