//! Google Cloud Storage connector using [`GoogleCloudStorageBuilder`].

use std::sync::Arc;

use object_store::ObjectStore;
use object_store::gcp::GoogleCloudStorageBuilder;

use super::StorageConnector;
use crate::TRACING_TARGET;
use crate::config::RegistryConfig;
use crate::error::{Error, ErrorKind, Result};

/// Connects to Google Cloud Storage.
///
/// With a configured service-account file the client is built from that
/// file alone, and the `GOOGLE_*` environment (including
/// `GOOGLE_APPLICATION_CREDENTIALS`) is not consulted. Without one the
/// client starts from the environment. Credential resolution itself is left
/// to `object_store`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcsConnector;

impl GcsConnector {
    /// Builds the client, taking the ambient builder from `ambient` only when
    /// no credential file is configured.
    fn build(
        &self,
        config: &RegistryConfig,
        ambient: impl FnOnce() -> GoogleCloudStorageBuilder,
    ) -> Result<Arc<dyn ObjectStore>> {
        let builder = match config.credential_path() {
            Some(path) => GoogleCloudStorageBuilder::new()
                .with_service_account_path(path.to_string_lossy()),
            None => ambient(),
        };

        let client = builder
            .with_bucket_name(&config.bucket)
            .build()
            .map_err(|e| {
                Error::from_source(ErrorKind::ClientConstruction, e).with_context(self.id())
            })?;

        tracing::debug!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            explicit_credentials = config.has_credential_path(),
            "GCS client constructed"
        );

        let store: Arc<dyn ObjectStore> = Arc::new(client);
        Ok(store)
    }
}

#[async_trait::async_trait]
impl StorageConnector for GcsConnector {
    fn id(&self) -> &'static str {
        "gcs"
    }

    async fn connect(&self, config: &RegistryConfig) -> Result<Arc<dyn ObjectStore>> {
        self.build(config, GoogleCloudStorageBuilder::from_env)
    }
}
