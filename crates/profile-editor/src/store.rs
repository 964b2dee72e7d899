//! Local key/value storage for the signed-in key and cached events.

use crate::collaborators::{IdentityStore, ProfileCache};
use crate::error::{EditorError, Result};
use nostr::{Event, ProfileContent};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// On-disk shape of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl StoreSnapshot {
    /// Read a snapshot; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(EditorError::StoreRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| EditorError::StoreFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let write_error = |source| EditorError::StoreWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let body = serde_json::to_string_pretty(self).map_err(|source| EditorError::StoreFormat {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, format!("{body}\n")).map_err(write_error)
    }

    /// Newest cached event of `kind` authored by the stored key.
    pub fn latest_event(&self, kind: u16) -> Option<&Event> {
        self.events
            .iter()
            .filter(|event| event.kind == kind)
            .filter(|event| {
                self.pubkey
                    .as_deref()
                    .is_none_or(|pubkey| event.pubkey == pubkey)
            })
            .max_by_key(|event| event.created_at)
    }

    /// Replace any cached event with the same kind and author.
    ///
    /// Authors match by exact key, the same rule `latest_event` uses.
    pub fn cache_event(&mut self, event: Event) {
        self.events
            .retain(|existing| !(existing.kind == event.kind && existing.pubkey == event.pubkey));
        self.events.push(event);
    }

    fn cached_profile(&self, kind: u16) -> Option<ProfileContent> {
        let event = self.latest_event(kind)?;
        match ProfileContent::from_event(event) {
            Ok(content) => Some(content),
            Err(error) => {
                warn!("ignoring unreadable cached profile {}: {}", event.id, error);
                None
            }
        }
    }
}

/// JSON file store. Re-read on every access so the cache is never stale.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        StoreSnapshot::load(&self.path)
    }

    /// Apply `update` to the stored snapshot and write it back.
    pub fn update(&self, update: impl FnOnce(&mut StoreSnapshot)) -> Result<()> {
        let mut snapshot = self.snapshot()?;
        update(&mut snapshot);
        snapshot.save(&self.path)
    }

    fn snapshot_or_empty(&self) -> StoreSnapshot {
        self.snapshot().unwrap_or_else(|error| {
            warn!("{}", error);
            StoreSnapshot::default()
        })
    }
}

impl ProfileCache for LocalStore {
    fn cached_profile(&self, kind: u16) -> Option<ProfileContent> {
        self.snapshot_or_empty().cached_profile(kind)
    }
}

impl IdentityStore for LocalStore {
    fn public_key(&self) -> Option<String> {
        self.snapshot_or_empty()
            .pubkey
            .filter(|pubkey| !pubkey.trim().is_empty())
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    pub fn set_public_key(&self, pubkey: impl Into<String>) {
        self.lock().pubkey = Some(pubkey.into());
    }

    pub fn cache_event(&self, event: Event) {
        self.lock().cache_event(event);
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreSnapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProfileCache for MemoryStore {
    fn cached_profile(&self, kind: u16) -> Option<ProfileContent> {
        self.lock().cached_profile(kind)
    }
}

impl IdentityStore for MemoryStore {
    fn public_key(&self) -> Option<String> {
        self.lock()
            .pubkey
            .clone()
            .filter(|pubkey| !pubkey.trim().is_empty())
    }
}
