use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use nostr::{KIND_METADATA, ProfileForm, StandardField};
use nostr_client::Nip05Client;

use crate::collaborators::{IdentityStore, ProfileCache, Sanitizer};
use crate::config::EditorConfig;
use crate::sanitize::HtmlSanitizer;
use crate::store::LocalStore;
use crate::verifier::AliasVerifier;

#[derive(Parser, Debug)]
#[command(name = "nostr-profile")]
#[command(about = "Inspect and verify the locally cached Nostr profile")]
pub struct ProfileCli {
    /// Store file. Overrides NOSTR_PROFILE_STORE_PATH.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Show the editable fields for the cached profile
    Fields,
    /// Check whether a custom field name would be accepted
    AddField {
        /// Candidate field name
        name: String,
    },
    /// Verify a NIP-05 alias against the signed-in key
    VerifyAlias {
        /// Alias to check; defaults to the cached profile's nip05
        alias: Option<String>,
    },
}

/// Run a parsed command and return its output.
pub async fn run(cli: ProfileCli, config: EditorConfig) -> Result<String> {
    let store = LocalStore::new(cli.store.unwrap_or_else(|| config.store_path.clone()));
    match cli.command {
        Commands::Fields => Ok(render_fields(&store)),
        Commands::AddField { name } => Ok(check_custom_field(&store, &name)),
        Commands::VerifyAlias { alias } => verify_alias(&store, &config, alias).await,
    }
}

fn render_fields(store: &LocalStore) -> String {
    let cached = store.cached_profile(KIND_METADATA);
    let form = ProfileForm::build(cached.as_ref());
    let sanitizer = HtmlSanitizer;

    let mut output = String::new();
    for field in form.fields() {
        let _ = writeln!(
            output,
            "{:<16} {}",
            sanitizer.clean(&field.label),
            sanitizer.clean(&field.value)
        );
    }
    let _ = writeln!(output, "[{}]", form.submit_label());
    output
}

fn check_custom_field(store: &LocalStore, name: &str) -> String {
    let cached = store.cached_profile(KIND_METADATA);
    let mut form = ProfileForm::build(cached.as_ref());
    match form.add_custom_field(name) {
        Ok(key) => format!("accepted: {key}\n"),
        Err(reason) => format!("rejected: {reason}\n"),
    }
}

async fn verify_alias(
    store: &LocalStore,
    config: &EditorConfig,
    alias: Option<String>,
) -> Result<String> {
    let pubkey = store
        .public_key()
        .ok_or_else(|| anyhow!("no signed-in public key in {}", store.path().display()))?;
    let alias = alias
        .or_else(|| {
            store
                .cached_profile(KIND_METADATA)
                .and_then(|content| content.text(StandardField::Nip05.as_str()))
        })
        .unwrap_or_default();

    let client = Nip05Client::with_config(config.nip05_config())
        .context("failed to build NIP-05 client")?;
    let verifier = AliasVerifier::new(Arc::new(client));
    let result = verifier.verify(&alias, &pubkey).await;

    Ok(format!(
        "{}: {}\n",
        if alias.is_empty() { "(no alias)" } else { alias.as_str() },
        result.as_str()
    ))
}
