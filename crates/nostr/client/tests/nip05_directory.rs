//! NIP-05 directory client against a local HTTP server.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
};
use nostr_client::{ClientError, Nip05Client, Nip05Config};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

const ALICE_PUBKEY: &str = "a1ce000000000000000000000000000000000000000000000000000000000001";

struct DirectoryHandle {
    origin: Url,
    _shutdown: oneshot::Sender<()>,
}

async fn nostr_json(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("name").map(String::as_str) {
        Some("alice") => Json(json!({
            "names": { "alice": ALICE_PUBKEY },
            "relays": { ALICE_PUBKEY: ["wss://relay.example.com"] }
        }))
        .into_response(),
        Some("broken") => (StatusCode::OK, "not json").into_response(),
        Some("down") => (StatusCode::SERVICE_UNAVAILABLE, "down").into_response(),
        Some("moved") => Redirect::temporary("/elsewhere").into_response(),
        Some("slow") => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "names": {} })).into_response()
        }
        _ => Json(json!({ "names": {} })).into_response(),
    }
}

async fn start_directory() -> DirectoryHandle {
    let router = Router::new().route("/.well-known/nostr.json", get(nostr_json));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let server = axum::serve(listener, router).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let _ = server.await;
    });

    DirectoryHandle {
        origin: Url::parse(&format!("http://{addr}")).unwrap(),
        _shutdown: shutdown_tx,
    }
}

fn client_for(directory: &DirectoryHandle, timeout: Duration) -> Nip05Client {
    Nip05Client::with_config(Nip05Config {
        timeout,
        directory_override: Some(directory.origin.clone()),
    })
    .unwrap()
}

#[tokio::test]
async fn test_resolves_bound_name() {
    let directory = start_directory().await;
    let client = client_for(&directory, Duration::from_secs(5));

    let profile = client.resolve("alice@example.com").await.unwrap();
    assert_eq!(profile.pubkey, ALICE_PUBKEY);
    assert_eq!(profile.relays, vec!["wss://relay.example.com".to_string()]);
}

#[tokio::test]
async fn test_unknown_name_is_an_error() {
    let directory = start_directory().await;
    let client = client_for(&directory, Duration::from_secs(5));

    let error = client.resolve("nobody@example.com").await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Nip05(nostr::Nip05Error::NameNotFound(name)) if name == "nobody"
    ));
}

#[tokio::test]
async fn test_bad_status_and_body() {
    let directory = start_directory().await;
    let client = client_for(&directory, Duration::from_secs(5));

    assert!(matches!(
        client.resolve("down@example.com").await,
        Err(ClientError::Status { status: 503, .. })
    ));
    assert!(matches!(
        client.resolve("broken@example.com").await,
        Err(ClientError::Nip05(nostr::Nip05Error::InvalidDocument(_)))
    ));
}

#[tokio::test]
async fn test_redirects_are_not_followed() {
    let directory = start_directory().await;
    let client = client_for(&directory, Duration::from_secs(5));

    assert!(matches!(
        client.resolve("moved@example.com").await,
        Err(ClientError::Status { status: 307, .. })
    ));
}

#[tokio::test]
async fn test_lookup_timeout() {
    let directory = start_directory().await;
    let client = client_for(&directory, Duration::from_millis(100));

    assert!(matches!(
        client.resolve("slow@example.com").await,
        Err(ClientError::Timeout(_))
    ));
}

#[tokio::test]
async fn test_malformed_alias_never_hits_network() {
    let client = Nip05Client::new().unwrap();
    assert!(matches!(
        client.resolve("not an alias").await,
        Err(ClientError::Nip05(nostr::Nip05Error::InvalidAddress(_)))
    ));
}

#[test]
fn test_directory_url_and_override_validation() {
    let client = Nip05Client::new().unwrap();
    let address = nostr::Nip05Address::parse("bob@example.com").unwrap();
    assert_eq!(
        client.directory_url(&address),
        "https://example.com/.well-known/nostr.json?name=bob"
    );

    let result = Nip05Client::with_config(Nip05Config {
        directory_override: Some(Url::parse("ftp://example.com").unwrap()),
        ..Nip05Config::default()
    });
    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
}
