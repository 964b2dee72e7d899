//! One profile editing session.
//!
//! UI events map to explicit handler methods that take already-extracted
//! values, so the session runs without any rendering surface.

use crate::collaborators::{
    AckHandle, AliasDirectory, EventPublisher, HistoryDisplay, IdentityStore, PreviewSurface,
    ProfileCache, Sanitizer,
};
use crate::config::{DEFAULT_HISTORY_CONTAINER, DEFAULT_SUBMIT_HANDLE, EditorConfig};
use crate::error::{EditorError, Result};
use crate::submit::{SubmissionPipeline, SubmitOutcome};
use crate::verifier::{AliasVerifier, VerificationResult};
use nostr::metadata::FieldWidget;
use nostr::{CustomKeyRejection, KIND_METADATA, ProfileContent, ProfileForm, StandardField};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Collaborators an editing session talks to.
#[derive(Clone)]
pub struct EditorServices {
    pub cache: Arc<dyn ProfileCache>,
    pub identity: Arc<dyn IdentityStore>,
    pub directory: Arc<dyn AliasDirectory>,
    pub publisher: Arc<dyn EventPublisher>,
    pub history: Arc<dyn HistoryDisplay>,
    pub sanitizer: Arc<dyn Sanitizer>,
    pub preview: Arc<dyn PreviewSurface>,
}

/// Handles the session reports against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    pub history_container: String,
    pub submit_handle: AckHandle,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_container: DEFAULT_HISTORY_CONTAINER.to_string(),
            submit_handle: AckHandle::new(DEFAULT_SUBMIT_HANDLE),
        }
    }
}

impl From<&EditorConfig> for EditorSettings {
    fn from(config: &EditorConfig) -> Self {
        Self {
            history_container: config.history_container.clone(),
            submit_handle: AckHandle::new(config.submit_handle.clone()),
        }
    }
}

/// A field ready for the rendering boundary. `value` is sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub widget: FieldWidget,
    pub value: String,
}

pub struct MetadataEditor {
    services: EditorServices,
    settings: EditorSettings,
    form: ProfileForm,
    verifier: AliasVerifier,
    pipeline: SubmissionPipeline,
    alias_status: Mutex<VerificationResult>,
}

impl MetadataEditor {
    /// Open the editor: build the form, show image previews, refresh the history
    /// list and check the cached alias.
    pub async fn open(services: EditorServices, settings: EditorSettings) -> Self {
        let cached = services.cache.cached_profile(KIND_METADATA);
        let editor = Self {
            verifier: AliasVerifier::new(Arc::clone(&services.directory)),
            pipeline: SubmissionPipeline::new(
                Arc::clone(&services.publisher),
                Arc::clone(&services.history),
                settings.history_container.clone(),
            ),
            form: ProfileForm::build(cached.as_ref()),
            alias_status: Mutex::new(VerificationResult::Unset),
            services,
            settings,
        };
        editor.show_previews();
        editor
            .services
            .history
            .reload(&editor.settings.history_container, KIND_METADATA);
        editor.refresh_alias().await;
        editor
    }

    /// Rebuild from the cache, dropping edits and session custom fields.
    pub async fn reset(&mut self) {
        let cached = self.services.cache.cached_profile(KIND_METADATA);
        self.form = ProfileForm::build(cached.as_ref());
        self.show_previews();
        self.refresh_alias().await;
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn submit_label(&self) -> &'static str {
        self.form.submit_label()
    }

    /// Every field with its value passed through the sanitizer.
    pub fn field_views(&self) -> Vec<FieldView> {
        self.form
            .fields()
            .iter()
            .map(|field| FieldView {
                key: field.key.clone(),
                label: self.services.sanitizer.clean(&field.label),
                widget: field.widget,
                value: self.services.sanitizer.clean(&field.value),
            })
            .collect()
    }

    pub fn alias_status(&self) -> VerificationResult {
        *self
            .alias_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a custom field. Rejections leave the form untouched.
    pub fn add_custom_field(
        &mut self,
        candidate: &str,
    ) -> std::result::Result<String, CustomKeyRejection> {
        self.form.add_custom_field(candidate).inspect_err(|reason| {
            debug!("custom field {:?} rejected: {}", candidate, reason);
        })
    }

    /// Handle a change to one input.
    ///
    /// Image fields update their preview; the alias field is re-verified.
    pub async fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.form.set_value(key, value)?;
        match StandardField::from_key(key) {
            Some(field) if field.is_image() => self.show_preview(field, value),
            Some(StandardField::Nip05) => {
                self.refresh_alias().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// Verify the current alias value and apply the result unless a newer
    /// check was issued meanwhile. Returns the status after the check.
    pub async fn refresh_alias(&self) -> VerificationResult {
        let alias = self
            .form
            .value(StandardField::Nip05.as_str())
            .unwrap_or_default()
            .to_string();
        let signed_in = self.services.identity.public_key().unwrap_or_default();

        if let Some(result) = self.verifier.check(&alias, &signed_in).await {
            *self
                .alias_status
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = result;
        }
        self.alias_status()
    }

    /// Submit the current form as the signed-in identity's profile.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let Some(pubkey) = self.services.identity.public_key() else {
            warn!("cannot submit profile without a signed-in key");
            return Err(EditorError::MissingIdentity);
        };
        let cached = self.services.cache.cached_profile(KIND_METADATA);
        Ok(self
            .pipeline
            .submit(
                &self.form.values(),
                cached.as_ref(),
                &pubkey,
                &self.settings.submit_handle,
            )
            .await)
    }

    /// Content the next submit would publish.
    pub fn pending_content(&self) -> ProfileContent {
        let cached = self.services.cache.cached_profile(KIND_METADATA);
        SubmissionPipeline::build_content(&self.form.values(), cached.as_ref())
    }

    fn show_previews(&self) {
        for field in [StandardField::Picture, StandardField::Banner] {
            let value = self.form.value(field.as_str()).unwrap_or_default();
            self.show_preview(field, value);
        }
    }

    fn show_preview(&self, field: StandardField, raw: &str) {
        let src = self.services.sanitizer.clean(raw);
        self.services.preview.show(field, &src);
    }
}
