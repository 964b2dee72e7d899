use super::error::{MetadataError, Result};
use crate::nip01::{Event, KIND_METADATA};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind-0 content: a JSON object of field name to value, in insertion order.
///
/// Cached profiles written by other clients may carry non-string values, so the
/// raw JSON value is kept. Anything this crate writes is string-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileContent {
    fields: Map<String, Value>,
}

impl ProfileContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the content of a kind-0 event.
    pub fn from_event(event: &Event) -> Result<Self> {
        if event.kind != KIND_METADATA {
            return Err(MetadataError::InvalidKind(event.kind));
        }
        Self::from_json(&event.content)
    }

    /// Parse a JSON object. Arrays, strings and other top-level values are rejected.
    pub fn from_json(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(other) => Err(MetadataError::InvalidContent(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
            Err(error) => Err(MetadataError::InvalidContent(error.to_string())),
        }
    }

    /// Serialize as a flat JSON object string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Field names in stored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Non-empty string value of `key`. Any other JSON value yields `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(value) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }

    /// Insert or replace a string field. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Value::String(value.into()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for ProfileContent
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut content = Self::new();
        for (key, value) in iter {
            content.insert(key, value);
        }
        content
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
