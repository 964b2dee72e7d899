//! Interfaces to everything the editor does not own: storage, the alias
//! directory, signing/broadcast, the history list, display sanitizing, and image
//! previews.

use async_trait::async_trait;
use nostr::{Nip05Error, ProfileContent, StandardField, UnsignedEvent};
use nostr_client::{ClientError, Nip05Client};
use std::fmt;
use thiserror::Error;

/// Identifies the UI control a submission reports its progress against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AckHandle(String);

impl AckHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an alias lookup produced no key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("malformed alias: {0}")]
    MalformedAlias(String),
    #[error("no binding for {0}")]
    NotFound(String),
    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// Last-known profile for the signed-in identity. Read-only, no network.
pub trait ProfileCache: Send + Sync {
    fn cached_profile(&self, kind: u16) -> Option<ProfileContent>;
}

/// Signed-in identity held in local storage.
pub trait IdentityStore: Send + Sync {
    fn public_key(&self) -> Option<String>;
}

/// Maps an alias to the public key bound to it.
#[async_trait]
pub trait AliasDirectory: Send + Sync {
    async fn resolve(&self, alias: &str) -> Result<String, DirectoryError>;
}

/// Signs an unsigned record with the local identity and broadcasts it.
///
/// Returns `false` on failure or cancellation. Retrying is the publisher's call.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn submit(&self, event: UnsignedEvent, ack: &AckHandle) -> bool;
}

/// List of previously published versions. Fire-and-forget.
pub trait HistoryDisplay: Send + Sync {
    fn reload(&self, container: &str, kind: u16);
}

/// Makes a raw value safe to place where it could be read as markup.
pub trait Sanitizer: Send + Sync {
    fn clean(&self, raw: &str) -> String;
}

/// Preview surface for image-valued fields. Receives sanitized values only.
pub trait PreviewSurface: Send + Sync {
    fn show(&self, field: StandardField, src: &str);
}

#[async_trait]
impl AliasDirectory for Nip05Client {
    async fn resolve(&self, alias: &str) -> Result<String, DirectoryError> {
        match Nip05Client::resolve(self, alias).await {
            Ok(profile) => Ok(profile.pubkey),
            Err(ClientError::Nip05(Nip05Error::InvalidAddress(raw))) => {
                Err(DirectoryError::MalformedAlias(raw))
            }
            Err(ClientError::Nip05(Nip05Error::NameNotFound(name))) => {
                Err(DirectoryError::NotFound(name))
            }
            Err(error) => Err(DirectoryError::Lookup(error.to_string())),
        }
    }
}
