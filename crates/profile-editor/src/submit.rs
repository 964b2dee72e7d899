//! Kind-0 submission: collect edited values, build the record, hand it off.

use crate::collaborators::{AckHandle, EventPublisher, HistoryDisplay};
use nostr::metadata::{collect_content, create_metadata_event, submission_keys};
use nostr::{FormValues, KIND_METADATA, ProfileContent, UnsignedEvent, unix_now_secs};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The publisher confirmed the record; history was refreshed.
    Published(UnsignedEvent),
    /// Nothing changed locally. The user may submit again.
    NotPublished,
}

impl SubmitOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, SubmitOutcome::Published(_))
    }
}

/// Builds kind-0 records from form values and delegates signing/broadcast.
///
/// Not reentrancy-guarded and never retries.
pub struct SubmissionPipeline {
    publisher: Arc<dyn EventPublisher>,
    history: Arc<dyn HistoryDisplay>,
    history_container: String,
}

impl SubmissionPipeline {
    pub fn new(
        publisher: Arc<dyn EventPublisher>,
        history: Arc<dyn HistoryDisplay>,
        history_container: impl Into<String>,
    ) -> Self {
        Self {
            publisher,
            history,
            history_container: history_container.into(),
        }
    }

    /// Content that would be published for `form_values` against `cached`.
    ///
    /// Keys come from the current cache plus any form key it lacks; empty
    /// values are dropped.
    pub fn build_content(form_values: &FormValues, cached: Option<&ProfileContent>) -> ProfileContent {
        let keys = submission_keys(cached, form_values.keys());
        collect_content(&keys, form_values)
    }

    /// Submit `form_values` as the profile of `signed_in_pubkey`.
    pub async fn submit(
        &self,
        form_values: &FormValues,
        cached: Option<&ProfileContent>,
        signed_in_pubkey: &str,
        ack: &AckHandle,
    ) -> SubmitOutcome {
        let content = Self::build_content(form_values, cached);

        let created_at = match unix_now_secs() {
            Ok(created_at) => created_at,
            Err(error) => {
                warn!("not submitting profile: {}", error);
                return SubmitOutcome::NotPublished;
            }
        };
        let event = match create_metadata_event(signed_in_pubkey, &content, created_at) {
            Ok(event) => event,
            Err(error) => {
                warn!("not submitting profile: {}", error);
                return SubmitOutcome::NotPublished;
            }
        };

        if !self.publisher.submit(event.clone(), ack).await {
            warn!("profile submission via {} was not confirmed", ack);
            return SubmitOutcome::NotPublished;
        }

        info!(
            "published profile with {} field(s) at {}",
            content.len(),
            created_at
        );
        self.history.reload(&self.history_container, KIND_METADATA);
        SubmitOutcome::Published(event)
    }
}
