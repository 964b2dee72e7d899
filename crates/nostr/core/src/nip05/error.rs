use thiserror::Error;

/// NIP-05 error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nip05Error {
    #[error("invalid NIP-05 address: {0}")]
    InvalidAddress(String),

    #[error("invalid nostr.json document: {0}")]
    InvalidDocument(String),

    #[error("name not found in nostr.json: {0}")]
    NameNotFound(String),
}

pub type Result<T> = std::result::Result<T, Nip05Error>;
