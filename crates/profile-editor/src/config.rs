use std::env;
use std::path::PathBuf;
use std::time::Duration;

use nostr_client::Nip05Config;
use thiserror::Error;
use url::Url;

pub const ENV_STORE_PATH: &str = "NOSTR_PROFILE_STORE_PATH";
pub const ENV_HISTORY_CONTAINER: &str = "NOSTR_PROFILE_HISTORY_CONTAINER";
pub const ENV_SUBMIT_HANDLE: &str = "NOSTR_PROFILE_SUBMIT_HANDLE";
pub const ENV_NIP05_TIMEOUT_MS: &str = "NOSTR_PROFILE_NIP05_TIMEOUT_MS";
pub const ENV_NIP05_DIRECTORY: &str = "NOSTR_PROFILE_NIP05_DIRECTORY";

pub const DEFAULT_HISTORY_CONTAINER: &str = "metadatahistory";
pub const DEFAULT_SUBMIT_HANDLE: &str = "metadatasubmitbutton";
pub const DEFAULT_NIP05_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid NOSTR_PROFILE_NIP05_TIMEOUT_MS: {0}")]
    InvalidNip05TimeoutMs(String),
    #[error("invalid NOSTR_PROFILE_NIP05_DIRECTORY: {0}")]
    InvalidNip05Directory(String),
    #[error("NOSTR_PROFILE_STORE_PATH is not set and no home directory was found")]
    MissingStorePath,
}

/// Editor settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub store_path: PathBuf,
    /// Container handle passed to the history display on refresh.
    pub history_container: String,
    /// Acknowledgement handle passed to the publisher.
    pub submit_handle: String,
    pub nip05_timeout: Duration,
    pub nip05_directory: Option<Url>,
}

impl EditorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let store_path = match non_empty(ENV_STORE_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_store_path().ok_or(ConfigError::MissingStorePath)?,
        };
        let history_container = non_empty(ENV_HISTORY_CONTAINER)
            .unwrap_or_else(|| DEFAULT_HISTORY_CONTAINER.to_string());
        let submit_handle =
            non_empty(ENV_SUBMIT_HANDLE).unwrap_or_else(|| DEFAULT_SUBMIT_HANDLE.to_string());
        let nip05_timeout_ms = non_empty(ENV_NIP05_TIMEOUT_MS)
            .unwrap_or_else(|| DEFAULT_NIP05_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|error| ConfigError::InvalidNip05TimeoutMs(error.to_string()))?;
        let nip05_directory = non_empty(ENV_NIP05_DIRECTORY)
            .map(|raw| parse_directory(&raw))
            .transpose()?;

        Ok(Self {
            store_path,
            history_container,
            submit_handle,
            nip05_timeout: Duration::from_millis(nip05_timeout_ms),
            nip05_directory,
        })
    }

    pub fn nip05_config(&self) -> Nip05Config {
        Nip05Config {
            timeout: self.nip05_timeout,
            directory_override: self.nip05_directory.clone(),
        }
    }
}

pub fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nostr-profile").join("store.json"))
}

fn parse_directory(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|error| ConfigError::InvalidNip05Directory(error.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidNip05Directory(format!(
            "expected http:// or https://, got {}",
            url.scheme()
        )));
    }
    Ok(url)
}
