use super::error::{Nip05Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Local part used when an address is a bare domain.
pub const DEFAULT_LOCAL_PART: &str = "_";

/// Path of the directory document on the alias domain.
pub const WELL_KNOWN_PATH: &str = "/.well-known/nostr.json";

static ADDRESS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z0-9_.+-]+)@)?([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+)$").ok()
});

/// A parsed `local@domain` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nip05Address {
    pub local: String,
    pub domain: String,
}

impl Nip05Address {
    /// Parse an identifier. A bare domain resolves the `_` name on that domain.
    ///
    /// ```rust
    /// use nostr::nip05::Nip05Address;
    ///
    /// let address = Nip05Address::parse("bob@example.com")?;
    /// assert_eq!(address.local, "bob");
    /// assert_eq!(address.domain, "example.com");
    /// # Ok::<(), nostr::nip05::Nip05Error>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let captures = ADDRESS_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(trimmed))
            .ok_or_else(|| Nip05Error::InvalidAddress(raw.to_string()))?;

        let local = captures
            .get(1)
            .map_or(DEFAULT_LOCAL_PART, |local| local.as_str())
            .to_string();
        let domain = captures
            .get(2)
            .map(|domain| domain.as_str().to_string())
            .ok_or_else(|| Nip05Error::InvalidAddress(raw.to_string()))?;

        Ok(Self { local, domain })
    }

    /// Directory URL for this address on its own domain.
    pub fn well_known_url(&self) -> String {
        self.well_known_url_on(&format!("https://{}", self.domain))
    }

    /// Directory URL for this address on an explicit origin.
    pub fn well_known_url_on(&self, origin: &str) -> String {
        format!(
            "{}{}?name={}",
            origin.trim_end_matches('/'),
            WELL_KNOWN_PATH,
            urlencoding::encode(&self.local)
        )
    }
}

impl fmt::Display for Nip05Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

impl FromStr for Nip05Address {
    type Err = Nip05Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Body of `/.well-known/nostr.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nip05Document {
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub relays: HashMap<String, Vec<String>>,
}

impl Nip05Document {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|error| Nip05Error::InvalidDocument(error.to_string()))
    }

    /// Public key bound to `local`.
    pub fn pubkey_for(&self, local: &str) -> Result<&str> {
        self.names
            .get(local)
            .map(String::as_str)
            .ok_or_else(|| Nip05Error::NameNotFound(local.to_string()))
    }

    /// Relay hints advertised for `pubkey`.
    pub fn relays_for(&self, pubkey: &str) -> Vec<String> {
        self.relays.get(pubkey).cloned().unwrap_or_default()
    }
}

/// Resolution result for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nip05Profile {
    pub pubkey: String,
    pub relays: Vec<String>,
}

impl Nip05Profile {
    /// Look `address` up in an already fetched document.
    pub fn from_document(address: &Nip05Address, document: &Nip05Document) -> Result<Self> {
        let pubkey = document.pubkey_for(&address.local)?.to_string();
        let relays = document.relays_for(&pubkey);
        Ok(Self { pubkey, relays })
    }
}
