//! NIP-05: Mapping Nostr keys to DNS-based internet identifiers
//!
//! An identifier such as `bob@example.com` is verified by fetching
//! `https://example.com/.well-known/nostr.json?name=bob` and checking that the
//! `names` map binds `bob` to the expected public key.
//!
//! Internal module boundaries:
//! - `error`: address/document error types
//! - `model`: address parsing, directory document, resolved profile
//! - `tests`: parsing and lookup coverage
//!
//! ```text
//! Client                              example.com
//!   │                                     │
//!   │── GET /.well-known/nostr.json ─────>│
//!   │       ?name=bob                     │
//!   │<── {"names":{"bob":"<hex>"}} ───────│
//! ```
//!
//! Fetching is not done here; see the `nostr-client` crate.

mod error;
mod model;

pub use error::{Nip05Error, Result};
pub use model::{
    DEFAULT_LOCAL_PART, Nip05Address, Nip05Document, Nip05Profile, WELL_KNOWN_PATH,
};
