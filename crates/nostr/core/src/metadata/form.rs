use super::content::ProfileContent;
use super::error::{MetadataError, Result};
use super::fields::StandardField;
use super::keys::{CustomKeyRejection, admit_custom_key, resolve_keys};
use std::collections::HashSet;

/// Submit button label when no profile has been published yet.
pub const SUBMIT_LABEL_SAVE: &str = "Save";
/// Submit button label when a cached profile exists.
pub const SUBMIT_LABEL_UPDATE: &str = "Update";

/// Input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    TextInput,
    TextArea,
    /// Text input paired with an image preview.
    ImageInput,
}

/// One editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub widget: FieldWidget,
    /// Raw value; must pass through a sanitizer before display.
    pub value: String,
}

impl FormField {
    fn for_key(key: &str, value: String) -> Self {
        let (label, widget) = match StandardField::from_key(key) {
            Some(field) if field.is_image() => (field.label(), FieldWidget::ImageInput),
            Some(field) if field.is_multiline() => (field.label(), FieldWidget::TextArea),
            Some(field) => (field.label(), FieldWidget::TextInput),
            None => (key, FieldWidget::TextInput),
        };
        Self {
            key: key.to_string(),
            label: label.to_string(),
            widget,
            value,
        }
    }

    /// The standard field this entry edits, if any.
    pub fn standard(&self) -> Option<StandardField> {
        StandardField::from_key(&self.key)
    }
}

/// Ordered field values collected from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

/// Editable field list built from the last cached profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    fields: Vec<FormField>,
    custom_keys: Vec<String>,
    has_cached_profile: bool,
}

impl ProfileForm {
    /// Build the form. `None` means the profile is being created for the first time.
    pub fn build(cached: Option<&ProfileContent>) -> Self {
        let fields = resolve_keys(cached)
            .iter()
            .map(|key| {
                let value = cached
                    .and_then(|content| content.text(key))
                    .unwrap_or_default();
                FormField::for_key(key, value)
            })
            .collect();
        Self {
            fields,
            custom_keys: Vec::new(),
            has_cached_profile: cached.is_some(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.key.as_str())
    }

    /// Custom keys added during this session, in the order added.
    pub fn custom_keys(&self) -> &[String] {
        &self.custom_keys
    }

    pub fn has_cached_profile(&self) -> bool {
        self.has_cached_profile
    }

    pub fn submit_label(&self) -> &'static str {
        if self.has_cached_profile {
            SUBMIT_LABEL_UPDATE
        } else {
            SUBMIT_LABEL_SAVE
        }
    }

    /// Validate and append an empty custom field. A rejection leaves the form unchanged.
    ///
    /// Returns the accepted (trimmed) key.
    pub fn add_custom_field(
        &mut self,
        candidate: &str,
    ) -> std::result::Result<String, CustomKeyRejection> {
        let existing: HashSet<String> = self.keys().map(str::to_string).collect();
        let key = admit_custom_key(candidate, &existing)?;
        self.fields.push(FormField::for_key(&key, String::new()));
        self.custom_keys.push(key.clone());
        Ok(key)
    }

    /// Replace the value of an existing field.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.key == key)
            .ok_or_else(|| MetadataError::UnknownField(key.to_string()))?;
        field.value = value.into();
        Ok(())
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.field(key).map(|field| field.value.as_str())
    }

    /// Current values in form order, including empty ones.
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|field| (field.key.as_str(), field.value.as_str()))
            .collect()
    }
}
