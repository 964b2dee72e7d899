use thiserror::Error;

/// Errors raised while reading or building profile metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid kind: {0} (expected 0)")]
    InvalidKind(u16),

    #[error("invalid metadata content: {0}")]
    InvalidContent(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
