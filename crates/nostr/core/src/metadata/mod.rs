//! Kind 0: User metadata
//!
//! A profile is a kind-0 event whose content is a flat JSON object of field
//! name to string. A handful of standard fields get dedicated editor treatment;
//! any other name is an opaque custom field.
//!
//! Internal module boundaries:
//! - `fields`: standard field names and their editor traits
//! - `content`: ordered content map parsed from / serialized to event content
//! - `keys`: key list resolution and custom key admission
//! - `form`: editable form state built from a cached profile
//! - `builders`: content collection and `EventTemplate` construction
//! - `tests`: resolution, form and builder coverage
//!
//! ## Key order
//!
//! ```text
//! cached keys (stored order) ++ missing standard keys ++ session custom keys
//! ```
//!
//! Standard keys in canonical order: `name`, `nip05`, `about`, `picture`,
//! `banner`, `lud06`, `lud16`.
//!
//! ## Editing a profile
//!
//! ```rust
//! use nostr::metadata::{ProfileContent, ProfileForm, collect_content, submission_keys};
//!
//! let cached = ProfileContent::from_json(r#"{"about":"hi","name":"alice"}"#)?;
//! let mut form = ProfileForm::build(Some(&cached));
//! assert_eq!(form.submit_label(), "Update");
//!
//! form.add_custom_field("location").unwrap();
//! form.set_value("location", "NYC")?;
//! form.set_value("about", "")?;
//!
//! let values = form.values();
//! let keys = submission_keys(Some(&cached), values.keys());
//! let content = collect_content(&keys, &values);
//! assert_eq!(content.to_json()?, r#"{"name":"alice","location":"NYC"}"#);
//! # Ok::<(), nostr::metadata::MetadataError>(())
//! ```

mod builders;
mod content;
mod error;
mod fields;
mod form;
mod keys;

pub use builders::{collect_content, create_metadata_event, create_metadata_template};
pub use content::ProfileContent;
pub use error::{MetadataError, Result};
pub use fields::{STANDARD_KEYS, StandardField, is_standard_key};
pub use form::{
    FieldWidget, FormField, FormValues, ProfileForm, SUBMIT_LABEL_SAVE, SUBMIT_LABEL_UPDATE,
};
pub use keys::{CustomKeyRejection, admit_custom_key, resolve_keys, submission_keys};
