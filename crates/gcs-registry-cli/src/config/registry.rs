//! Registry stage configuration.

use std::path::PathBuf;

use clap::Args;
use gcs_registry::RegistryConfig;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Registry push configuration.
///
/// # Environment Variables
///
/// - `GCS_BUCKET` - Destination bucket name
/// - `GCS_OBJECT_NAME` - Destination object's base name
/// - `GCS_OBJECT_PATH` - Destination key prefix (empty for the bucket root)
/// - `GCS_FILE_PATH` - Local artifact to upload
/// - `GCS_CREDENTIAL_PATH` - Service-account credential file
///
/// When no credential path is given, `GOOGLE_APPLICATION_CREDENTIALS` must
/// be set.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct RegistryArgs {
    /// Name of the destination bucket.
    #[arg(long, env = "GCS_BUCKET")]
    pub bucket: String,

    /// Base name of the destination object.
    #[arg(long, env = "GCS_OBJECT_NAME")]
    pub object_name: String,

    /// Key prefix prepended verbatim to the object name.
    ///
    /// No separator is inserted: include a trailing `/` to place the object
    /// under a directory-like prefix, or pass an empty value for the bucket
    /// root.
    #[arg(long, env = "GCS_OBJECT_PATH")]
    pub object_path: String,

    /// Local artifact to upload.
    #[arg(long, env = "GCS_FILE_PATH")]
    pub file_path: PathBuf,

    /// Path to a service-account credential file.
    #[arg(long, env = "GCS_CREDENTIAL_PATH")]
    pub credential_path: Option<PathBuf>,
}

impl RegistryArgs {
    /// Logs the registry configuration (no credential contents).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            bucket = %self.bucket,
            object_path = %self.object_path,
            object_name = %self.object_name,
            file_path = %self.file_path.display(),
            credential_path = ?self.credential_path,
            "Registry configuration"
        );
    }
}

impl From<RegistryArgs> for RegistryConfig {
    fn from(args: RegistryArgs) -> Self {
        let config = RegistryConfig::new(
            args.bucket,
            args.object_name,
            args.object_path,
            args.file_path,
        );

        match args.credential_path {
            Some(path) => config.with_credential_path(path),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn converts_into_registry_config() {
        let args = RegistryArgs {
            bucket: "artifacts".into(),
            object_name: "app.tar.gz".into(),
            object_path: "builds/".into(),
            file_path: "target/app.tar.gz".into(),
            credential_path: Some("/secrets/sa.json".into()),
        };

        let config = RegistryConfig::from(args);
        assert_eq!(config.object_key(), "builds/app.tar.gz");
        assert_eq!(config.credential_path(), Some(Path::new("/secrets/sa.json")));
    }
}
