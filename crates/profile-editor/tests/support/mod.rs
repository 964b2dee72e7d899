//! Fake collaborators shared by the editor integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nostr::{Event, KIND_METADATA, StandardField, UnsignedEvent};
use profile_editor::{
    AckHandle, AliasDirectory, DirectoryError, EditorServices, EventPublisher, HistoryDisplay,
    HtmlSanitizer, MemoryStore, PreviewSurface,
};
use tokio::sync::oneshot;

pub const SIGNED_IN: &str = "5ee0000000000000000000000000000000000000000000000000000000000001";
pub const SOMEONE_ELSE: &str = "0be0000000000000000000000000000000000000000000000000000000000002";

#[derive(Default)]
pub struct FakeDirectory {
    bindings: Mutex<HashMap<String, Result<String, DirectoryError>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn bind(&self, alias: &str, pubkey: &str) {
        self.bindings
            .lock()
            .unwrap()
            .insert(alias.to_string(), Ok(pubkey.to_string()));
    }

    pub fn fail(&self, alias: &str, error: DirectoryError) {
        self.bindings
            .lock()
            .unwrap()
            .insert(alias.to_string(), Err(error));
    }

    /// Hold lookups of `alias` until the returned sender fires.
    pub fn gate(&self, alias: &str) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.gates.lock().unwrap().insert(alias.to_string(), gate);
        release
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AliasDirectory for FakeDirectory {
    async fn resolve(&self, alias: &str) -> Result<String, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(alias);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.bindings
            .lock()
            .unwrap()
            .get(alias)
            .cloned()
            .unwrap_or_else(|| Err(DirectoryError::NotFound(alias.to_string())))
    }
}

pub struct RecordingPublisher {
    accept: bool,
    submitted: Mutex<Vec<(UnsignedEvent, AckHandle)>>,
}

impl RecordingPublisher {
    pub fn new(accept: bool) -> Self {
        Self {
            accept,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<(UnsignedEvent, AckHandle)> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn submit(&self, event: UnsignedEvent, ack: &AckHandle) -> bool {
        self.submitted.lock().unwrap().push((event, ack.clone()));
        self.accept
    }
}

#[derive(Default)]
pub struct RecordingHistory {
    reloads: Mutex<Vec<(String, u16)>>,
}

impl RecordingHistory {
    pub fn reloads(&self) -> Vec<(String, u16)> {
        self.reloads.lock().unwrap().clone()
    }
}

impl HistoryDisplay for RecordingHistory {
    fn reload(&self, container: &str, kind: u16) {
        self.reloads
            .lock()
            .unwrap()
            .push((container.to_string(), kind));
    }
}

#[derive(Default)]
pub struct RecordingPreview {
    shown: Mutex<Vec<(StandardField, String)>>,
}

impl RecordingPreview {
    pub fn shown(&self) -> Vec<(StandardField, String)> {
        self.shown.lock().unwrap().clone()
    }

    pub fn last(&self, field: StandardField) -> Option<String> {
        self.shown()
            .into_iter()
            .rev()
            .find(|(shown, _)| *shown == field)
            .map(|(_, src)| src)
    }
}

impl PreviewSurface for RecordingPreview {
    fn show(&self, field: StandardField, src: &str) {
        self.shown.lock().unwrap().push((field, src.to_string()));
    }
}

pub fn metadata_event(pubkey: &str, created_at: u64, content: &str) -> Event {
    Event {
        id: format!("event-{created_at}"),
        pubkey: pubkey.to_string(),
        created_at,
        kind: KIND_METADATA,
        tags: Vec::new(),
        content: content.to_string(),
        sig: "sig".to_string(),
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub directory: Arc<FakeDirectory>,
    pub publisher: Arc<RecordingPublisher>,
    pub history: Arc<RecordingHistory>,
    pub preview: Arc<RecordingPreview>,
}

impl Harness {
    /// Signed-in harness with an optional cached profile.
    pub fn new(cached_content: Option<&str>, accept: bool) -> Self {
        let store = Arc::new(MemoryStore::default());
        store.set_public_key(SIGNED_IN);
        if let Some(content) = cached_content {
            store.cache_event(metadata_event(SIGNED_IN, 1_700_000_000, content));
        }
        Self {
            store,
            directory: Arc::new(FakeDirectory::default()),
            publisher: Arc::new(RecordingPublisher::new(accept)),
            history: Arc::new(RecordingHistory::default()),
            preview: Arc::new(RecordingPreview::default()),
        }
    }

    pub fn services(&self) -> EditorServices {
        EditorServices {
            cache: self.store.clone(),
            identity: self.store.clone(),
            directory: self.directory.clone(),
            publisher: self.publisher.clone(),
            history: self.history.clone(),
            sanitizer: Arc::new(HtmlSanitizer),
            preview: self.preview.clone(),
        }
    }
}
