//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── registry: RegistryArgs   # Bucket, object key, artifact, credentials
//! ├── output                   # Where to write the artifact descriptor
//! └── dry_run                  # Push into an in-memory store
//! ```
//!
//! All registry options can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod registry;

use std::path::PathBuf;
use std::process;

use clap::Parser;
pub use registry::RegistryArgs;
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "gcs-registry")]
#[command(about = "Push a build artifact to Google Cloud Storage")]
#[command(version)]
pub struct Cli {
    /// Registry push configuration.
    #[clap(flatten)]
    pub registry: RegistryArgs,

    /// File to write the artifact descriptor to (stdout if omitted).
    #[arg(short, long, env = "GCS_REGISTRY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Push into an in-memory store instead of GCS.
    #[arg(long)]
    #[serde(default)]
    pub dry_run: bool,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments so that its
    /// values are picked up as environment defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        self.registry.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            output = ?self.output,
            dry_run = self.dry_run,
            "Output configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
