pub mod metadata;
pub mod nip01;
pub mod nip05;

pub use metadata::{
    CustomKeyRejection, FormValues, ProfileContent, ProfileForm, STANDARD_KEYS, StandardField,
};
pub use nip01::{Event, EventTemplate, KIND_METADATA, Nip01Error, UnsignedEvent, unix_now_secs};
pub use nip05::{Nip05Address, Nip05Document, Nip05Error, Nip05Profile};
