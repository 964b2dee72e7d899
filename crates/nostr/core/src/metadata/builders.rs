use super::content::ProfileContent;
use super::error::Result;
use super::form::FormValues;
use crate::nip01::{EventTemplate, KIND_METADATA, UnsignedEvent};

/// Collect the outgoing content for `keys`, skipping empty or absent values.
///
/// Clearing an input therefore removes the field from the published profile.
pub fn collect_content(keys: &[String], values: &FormValues) -> ProfileContent {
    keys.iter()
        .filter_map(|key| {
            values
                .get(key)
                .filter(|value| !value.is_empty())
                .map(|value| (key.as_str(), value))
        })
        .collect()
}

/// Create an EventTemplate for a kind-0 metadata event.
pub fn create_metadata_template(content: &ProfileContent, created_at: u64) -> Result<EventTemplate> {
    Ok(EventTemplate {
        created_at,
        kind: KIND_METADATA,
        tags: Vec::new(),
        content: content.to_json()?,
    })
}

/// Create the unsigned kind-0 record published for `pubkey`.
pub fn create_metadata_event(
    pubkey: &str,
    content: &ProfileContent,
    created_at: u64,
) -> Result<UnsignedEvent> {
    Ok(create_metadata_template(content, created_at)?.into_unsigned(pubkey))
}
