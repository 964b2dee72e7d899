//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("timeout error: {0}")]
    Timeout(String),

    #[error("NIP-05 error: {0}")]
    Nip05(#[from] nostr::Nip05Error),
}

/// Client result type.
pub type Result<T> = std::result::Result<T, ClientError>;
