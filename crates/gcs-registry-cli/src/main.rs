#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod shutdown;
mod telemetry;
mod terminal;

use std::path::Path;
use std::process;

use anyhow::Context;
use gcs_registry::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::config::Cli;
use crate::terminal::TerminalUi;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "gcs_registry_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "gcs_registry_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "gcs_registry_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "registry push completed successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %format!("{error:#}"),
            "registry push failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing()?;
    cli.log();

    let token = CancellationToken::new();
    let signals = tokio::spawn(shutdown::cancel_on_signal(token.clone()));
    let ctx = PushContext::from_token(token.clone());

    let config = RegistryConfig::from(cli.registry);
    let result = if cli.dry_run {
        let registry =
            GcsRegistry::with_connector(InMemoryConnector::new(), AmbientCredentials::from_env());
        run_stage(registry, config, &ctx).await
    } else {
        run_stage(GcsRegistry::new(), config, &ctx).await
    };

    shutdown::stop_listener(&token, signals).await;

    let artifact = result?;
    write_artifact(&artifact, cli.output.as_deref()).await
}

/// Runs the host lifecycle against a registry component.
async fn run_stage<R>(
    mut registry: R,
    config: RegistryConfig,
    ctx: &PushContext,
) -> anyhow::Result<Artifact>
where
    R: Registry<Artifact = Artifact> + Configurable<Config = RegistryConfig>,
{
    registry
        .config_set(config)
        .context("invalid registry configuration")?;

    registry
        .push(ctx, &TerminalUi)
        .await
        .context("failed to push artifact")
}

/// Writes the artifact descriptor as JSON to `output`, or stdout.
async fn write_artifact(artifact: &Artifact, output: Option<&Path>) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(artifact).context("failed to serialize artifact")?;

    match output {
        Some(path) => tokio::fs::write(path, json + "\n")
            .await
            .with_context(|| format!("failed to write artifact to {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
