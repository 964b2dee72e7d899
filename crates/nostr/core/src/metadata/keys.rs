//! Field key resolution for the profile editor.
//!
//! The rendered key list is the cached profile's keys in stored order, then the
//! standard keys it lacks in canonical order, then whatever custom keys the user
//! added during the session. Every function here is pure.

use super::content::ProfileContent;
use super::fields::{STANDARD_KEYS, is_standard_key};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static CUSTOM_KEY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").ok());

/// Why a custom field name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomKeyRejection {
    /// Contains characters outside letters, digits, `_` and `-`.
    InvalidCharacters,
    /// Nothing left after trimming.
    Empty,
    /// Collides with a standard field.
    Reserved,
    /// Already present in the form.
    Duplicate,
}

impl CustomKeyRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomKeyRejection::InvalidCharacters => "invalid-characters",
            CustomKeyRejection::Empty => "empty",
            CustomKeyRejection::Reserved => "reserved",
            CustomKeyRejection::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for CustomKeyRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for CustomKeyRejection {}

/// Ordered, de-duplicated key list for a cached profile (or none).
pub fn resolve_keys(cached: Option<&ProfileContent>) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(STANDARD_KEYS.len());
    if let Some(content) = cached {
        push_unique(&mut keys, content.keys());
    }
    push_unique(&mut keys, STANDARD_KEYS);
    keys
}

/// Validate a custom field name against the keys already in the form.
///
/// Returns the trimmed key on acceptance; the caller appends it.
pub fn admit_custom_key(
    candidate: &str,
    existing: &HashSet<String>,
) -> Result<String, CustomKeyRejection> {
    let key = candidate.trim();
    if key.is_empty() {
        return Err(CustomKeyRejection::Empty);
    }
    let well_formed = CUSTOM_KEY_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(key));
    if !well_formed {
        return Err(CustomKeyRejection::InvalidCharacters);
    }
    if is_standard_key(key) {
        return Err(CustomKeyRejection::Reserved);
    }
    if existing.contains(key) {
        return Err(CustomKeyRejection::Duplicate);
    }
    Ok(key.to_string())
}

/// Key order used at submit time.
///
/// Re-resolves against the current cache, then folds in any form key the base
/// order does not know about so session-added fields are never dropped.
pub fn submission_keys<'a>(
    cached: Option<&ProfileContent>,
    form_keys: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut keys = resolve_keys(cached);
    push_unique(&mut keys, form_keys);
    keys
}

fn push_unique<'a>(keys: &mut Vec<String>, candidates: impl IntoIterator<Item = &'a str>) {
    for candidate in candidates {
        if !keys.iter().any(|key| key == candidate) {
            keys.push(candidate.to_string());
        }
    }
}
