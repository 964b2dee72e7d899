//! Profile metadata editing session.
//!
//! Builds on the `nostr` metadata primitives and wires them to the outside
//! world through the traits in [`collaborators`]:
//! - `editor`: one editing session (form, previews, alias status, submit)
//! - `verifier`: NIP-05 alias verification with stale-response discarding
//! - `submit`: kind-0 record assembly and hand-off to the publisher
//! - `store`: local JSON store for the signed-in key and cached events
//! - `sanitize`: default display sanitizer
//! - `config`: environment configuration
//! - `cli`: `nostr-profile` command implementations

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod editor;
pub mod error;
pub mod sanitize;
pub mod store;
pub mod submit;
pub mod verifier;

pub use collaborators::{
    AckHandle, AliasDirectory, DirectoryError, EventPublisher, HistoryDisplay, IdentityStore,
    PreviewSurface, ProfileCache, Sanitizer,
};
pub use config::{ConfigError, EditorConfig};
pub use editor::{EditorServices, EditorSettings, FieldView, MetadataEditor};
pub use error::{EditorError, Result};
pub use sanitize::HtmlSanitizer;
pub use store::{LocalStore, MemoryStore, StoreSnapshot};
pub use submit::{SubmissionPipeline, SubmitOutcome};
pub use verifier::{AliasVerifier, VerificationResult};
