//! NIP-05 directory lookups.

use crate::error::{ClientError, Result};
use nostr::{Nip05Address, Nip05Document, Nip05Profile};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default request timeout for directory lookups.
pub const DEFAULT_NIP05_TIMEOUT: Duration = Duration::from_secs(10);

/// Directory client configuration.
#[derive(Debug, Clone)]
pub struct Nip05Config {
    pub timeout: Duration,
    /// Send every lookup to this origin instead of `https://<domain>`.
    pub directory_override: Option<Url>,
}

impl Default for Nip05Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_NIP05_TIMEOUT,
            directory_override: None,
        }
    }
}

/// Resolves NIP-05 identifiers to public keys over HTTP.
#[derive(Debug, Clone)]
pub struct Nip05Client {
    http: reqwest::Client,
    config: Nip05Config,
}

impl Nip05Client {
    /// Create a client with default config.
    pub fn new() -> Result<Self> {
        Self::with_config(Nip05Config::default())
    }

    /// Create a client with custom config.
    pub fn with_config(config: Nip05Config) -> Result<Self> {
        if let Some(origin) = &config.directory_override
            && origin.scheme() != "http"
            && origin.scheme() != "https"
        {
            return Err(ClientError::InvalidUrl(format!(
                "directory override must use http:// or https:// scheme, got: {}",
                origin.scheme()
            )));
        }

        // NIP-05 fetchers must not follow redirects.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Nip05Config {
        &self.config
    }

    /// URL queried for `address`.
    pub fn directory_url(&self, address: &Nip05Address) -> String {
        match &self.config.directory_override {
            Some(origin) => address.well_known_url_on(origin.as_str()),
            None => address.well_known_url(),
        }
    }

    /// Fetch the `nostr.json` document that should contain `address`.
    pub async fn fetch_document(&self, address: &Nip05Address) -> Result<Nip05Document> {
        let url = self.directory_url(address);
        debug!("fetching NIP-05 document from {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| self.map_request_error(error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| self.map_request_error(error))?;
        Ok(Nip05Document::from_json(&body)?)
    }

    /// Resolve an identifier such as `bob@example.com` to its bound public key.
    pub async fn resolve(&self, alias: &str) -> Result<Nip05Profile> {
        let address = Nip05Address::parse(alias)?;
        let document = self.fetch_document(&address).await?;
        let profile = Nip05Profile::from_document(&address, &document)?;
        debug!("resolved {} to {}", address, profile.pubkey);
        Ok(profile)
    }

    fn map_request_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(format!(
                "NIP-05 lookup timed out after {:?}",
                self.config.timeout
            ))
        } else {
            ClientError::Http(error)
        }
    }
}
