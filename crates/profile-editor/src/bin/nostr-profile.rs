use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use profile_editor::EditorConfig;
use profile_editor::cli::{ProfileCli, run};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = ProfileCli::parse();
    let config = EditorConfig::from_env().context("invalid editor configuration")?;
    let output = run(cli, config).await?;

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    Ok(())
}
