mod support;

use std::sync::Arc;
use std::time::Duration;

use nostr_client::{Nip05Client, Nip05Config};
use profile_editor::{AliasDirectory, AliasVerifier, DirectoryError, VerificationResult};
use support::{FakeDirectory, SIGNED_IN, SOMEONE_ELSE};

#[tokio::test]
async fn empty_alias_is_unset_without_lookup() {
    let directory = Arc::new(FakeDirectory::default());
    let verifier = AliasVerifier::new(directory.clone());

    assert_eq!(verifier.verify("", SIGNED_IN).await, VerificationResult::Unset);
    assert_eq!(directory.calls(), 0);
}

#[tokio::test]
async fn whitespace_alias_is_looked_up_and_invalid() {
    let directory = Arc::new(FakeDirectory::default());
    let verifier = AliasVerifier::new(directory.clone());

    assert_eq!(
        verifier.verify("   ", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    assert_eq!(directory.calls(), 1);
}

#[tokio::test]
async fn directory_binding_decides_validity() {
    let directory = Arc::new(FakeDirectory::default());
    directory.bind("alice@example.com", SIGNED_IN);
    directory.bind("bob@example.com", SOMEONE_ELSE);
    directory.fail("broken@example.com", DirectoryError::Lookup("timed out".into()));
    let verifier = AliasVerifier::new(directory.clone());

    assert_eq!(
        verifier.verify("alice@example.com", SIGNED_IN).await,
        VerificationResult::Valid
    );
    assert_eq!(
        verifier.verify("bob@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    assert_eq!(
        verifier.verify("carol@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    assert_eq!(
        verifier.verify("broken@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
}

#[tokio::test]
async fn bound_key_must_match_exactly() {
    let directory = Arc::new(FakeDirectory::default());
    directory.bind("_@example.com", &SIGNED_IN.to_uppercase());
    directory.bind("padded@example.com", &format!(" {SIGNED_IN} "));
    directory.bind("alice@example.com", SIGNED_IN);
    let verifier = AliasVerifier::new(directory.clone());

    assert_eq!(
        verifier.verify("_@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    assert_eq!(
        verifier.verify("padded@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    // The alias goes to the directory as typed.
    assert_eq!(
        verifier.verify(" alice@example.com", SIGNED_IN).await,
        VerificationResult::Invalid
    );
    assert_eq!(directory.calls(), 3);
}

#[tokio::test]
async fn stale_check_is_discarded() {
    let directory = Arc::new(FakeDirectory::default());
    directory.bind("old@example.com", SOMEONE_ELSE);
    directory.bind("new@example.com", SIGNED_IN);
    let release = directory.gate("old@example.com");
    let verifier = AliasVerifier::new(directory.clone());

    let slow = verifier.check("old@example.com", SIGNED_IN);
    let fast = async {
        let result = verifier.check("new@example.com", SIGNED_IN).await;
        let _ = release.send(());
        result
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow, None);
    assert_eq!(fast, Some(VerificationResult::Valid));
    assert_eq!(directory.calls(), 2);
}

#[tokio::test]
async fn sequential_checks_all_apply() {
    let directory = Arc::new(FakeDirectory::default());
    directory.bind("alice@example.com", SIGNED_IN);
    let verifier = AliasVerifier::new(directory);

    assert_eq!(
        verifier.check("alice@example.com", SIGNED_IN).await,
        Some(VerificationResult::Valid)
    );
    assert_eq!(
        verifier.check("", SIGNED_IN).await,
        Some(VerificationResult::Unset)
    );
}

#[test]
fn verification_result_attributes() {
    assert_eq!(VerificationResult::default(), VerificationResult::Unset);
    assert_eq!(VerificationResult::Unset.aria_invalid(), None);
    assert_eq!(VerificationResult::Valid.aria_invalid(), Some("false"));
    assert_eq!(VerificationResult::Invalid.aria_invalid(), Some("true"));
    assert!(VerificationResult::Valid.is_valid());
    assert_eq!(VerificationResult::Invalid.as_str(), "invalid");
}

#[tokio::test]
async fn nip05_client_reports_malformed_alias() {
    let client = Nip05Client::with_config(Nip05Config {
        timeout: Duration::from_millis(200),
        directory_override: None,
    })
    .unwrap();

    let result = AliasDirectory::resolve(&client, "not an alias").await;

    assert!(matches!(result, Err(DirectoryError::MalformedAlias(_))));
}
