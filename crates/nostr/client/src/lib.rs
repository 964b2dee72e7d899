//! Minimal Nostr client transport for profile editing.
//!
//! This crate intentionally exposes a small surface:
//! - NIP-05 directory lookups over HTTPS

pub mod error;
pub mod nip05;

pub use error::{ClientError, Result};
pub use nip05::{DEFAULT_NIP05_TIMEOUT, Nip05Client, Nip05Config};
