//! NIP-05 alias verification against the signed-in key.

use crate::collaborators::AliasDirectory;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Outcome of checking the alias field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationResult {
    /// Alias field is empty.
    #[default]
    Unset,
    /// Directory binds the alias to the signed-in key.
    Valid,
    /// Mismatch, no binding, malformed alias or lookup failure.
    Invalid,
}

impl VerificationResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationResult::Unset => "unset",
            VerificationResult::Valid => "valid",
            VerificationResult::Invalid => "invalid",
        }
    }

    /// Value for the input's `aria-invalid` attribute; `None` removes it.
    pub fn aria_invalid(&self) -> Option<&'static str> {
        match self {
            VerificationResult::Unset => None,
            VerificationResult::Valid => Some("false"),
            VerificationResult::Invalid => Some("true"),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }
}

/// Checks aliases through an [`AliasDirectory`].
pub struct AliasVerifier {
    directory: Arc<dyn AliasDirectory>,
    issued: AtomicU64,
}

impl AliasVerifier {
    pub fn new(directory: Arc<dyn AliasDirectory>) -> Self {
        Self {
            directory,
            issued: AtomicU64::new(0),
        }
    }

    /// Verify `alias` against `signed_in_pubkey`.
    ///
    /// An empty alias is `Unset` without a directory call; whitespace is not
    /// empty and goes to the directory. The bound key must equal the signed-in
    /// key exactly. Every failure collapses to `Invalid`. Overlapping calls are
    /// independent; callers that apply results in arrival order get
    /// last-response-wins.
    pub async fn verify(&self, alias: &str, signed_in_pubkey: &str) -> VerificationResult {
        if alias.is_empty() {
            return VerificationResult::Unset;
        }

        match self.directory.resolve(alias).await {
            Ok(pubkey) if pubkey == signed_in_pubkey => {
                debug!("alias {} verified", alias);
                VerificationResult::Valid
            }
            Ok(pubkey) => {
                debug!("alias {} is bound to a different key {}", alias, pubkey);
                VerificationResult::Invalid
            }
            Err(error) => {
                debug!("alias {} did not verify: {}", alias, error);
                VerificationResult::Invalid
            }
        }
    }

    /// Sequenced variant of [`verify`](Self::verify).
    ///
    /// Returns `None` when another check was issued after this one started, so
    /// a slow stale response never replaces a fresher result.
    pub async fn check(&self, alias: &str, signed_in_pubkey: &str) -> Option<VerificationResult> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.verify(alias, signed_in_pubkey).await;
        let latest = self.issued.load(Ordering::SeqCst);
        if latest == ticket {
            Some(result)
        } else {
            debug!(
                "discarding stale alias check {} (latest is {})",
                ticket, latest
            );
            None
        }
    }
}
