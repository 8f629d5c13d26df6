//! Registry component that pushes a local artifact to a bucket.

use std::path::Path;
use std::sync::Arc;

use object_store::ObjectStore;
use object_store::buffered::BufWriter;
use object_store::path::Path as ObjectPath;
use tokio::io::AsyncWriteExt;

use crate::TRACING_TARGET;
use crate::artifact::Artifact;
use crate::component::{Configurable, ConfigurableNotify, PushContext, Registry};
use crate::config::{AmbientCredentials, RegistryConfig};
use crate::error::{Error, ErrorKind, Result};
use crate::storage::{GcsConnector, StorageConnector};
use crate::ui::{StatusGuard, Ui};

/// Status line emitted when a push starts.
pub const PUSH_STATUS_MESSAGE: &str = "Pushing object to GCS";

/// Registry component that uploads one file per push.
///
/// The connector decides which object store the bytes land in; the default
/// [`GcsConnector`] talks to Google Cloud Storage.
pub struct GcsRegistry<C = GcsConnector> {
    config: Option<RegistryConfig>,
    connector: C,
    ambient: AmbientCredentials,
}

impl GcsRegistry {
    /// Creates a GCS registry, probing the environment for ambient
    /// credentials once.
    pub fn new() -> Self {
        Self::with_connector(GcsConnector, AmbientCredentials::from_env())
    }
}

impl Default for GcsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StorageConnector> GcsRegistry<C> {
    /// Creates a registry with an explicit connector and ambient credential
    /// availability.
    pub fn with_connector(connector: C, ambient: AmbientCredentials) -> Self {
        Self {
            config: None,
            connector,
            ambient,
        }
    }

    /// Returns the storage connector.
    pub fn connector(&self) -> &C {
        &self.connector
    }
}

impl<C> Configurable for GcsRegistry<C> {
    type Config = RegistryConfig;

    fn config(&self) -> Option<&RegistryConfig> {
        self.config.as_ref()
    }
}

impl<C> ConfigurableNotify for GcsRegistry<C> {
    fn config_set(&mut self, config: RegistryConfig) -> Result<()> {
        config.validate(self.ambient)?;

        tracing::debug!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            object_key = %config.object_key(),
            file_path = %config.file_path.display(),
            explicit_credentials = config.has_credential_path(),
            "registry configuration accepted"
        );

        self.config = Some(config);
        Ok(())
    }
}

#[async_trait::async_trait]
impl<C: StorageConnector> Registry for GcsRegistry<C> {
    type Artifact = Artifact;

    #[tracing::instrument(name = "registry.push", skip_all)]
    async fn push(&self, ctx: &PushContext, ui: &dyn Ui) -> Result<Artifact> {
        let mut status = StatusGuard::open(ui);
        status.update(PUSH_STATUS_MESSAGE);

        let config = self
            .config
            .as_ref()
            .ok_or_else(|| Error::configuration("registry configuration has not been set"))?;

        let key = config.object_key();
        let location = object_location(&key)?;

        let store = tokio::select! {
            biased;
            () = ctx.token().cancelled() => return Err(Error::cancelled()),
            store = self.connector.connect(config) => store?,
        };

        let data = read_artifact(&config.file_path).await?;

        tracing::info!(
            target: TRACING_TARGET,
            connector = self.connector.id(),
            bucket = %config.bucket,
            key = %key,
            size = data.len(),
            "pushing object"
        );

        upload(store, location, &data, ctx).await?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            key = %key,
            "object pushed"
        );

        Ok(Artifact::new(config.bucket.clone(), key))
    }
}

/// Reads the whole artifact into memory.
///
/// A read failure ends the push here; nothing is written remotely.
async fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        tracing::error!(
            target: TRACING_TARGET,
            path = %path.display(),
            error = %e,
            "failed to read artifact"
        );
        Error::from_source(ErrorKind::LocalIo, e).with_context(path.display().to_string())
    })
}

/// Maps an object key onto a storage location without rewriting it.
///
/// The stored name is always exactly `key`. Keys the store would encode or
/// normalize (a leading or trailing `/`, an empty or `..` segment, control
/// characters) are rejected before anything is uploaded.
fn object_location(key: &str) -> Result<ObjectPath> {
    let location = ObjectPath::parse(key).map_err(|e| {
        Error::from_source(ErrorKind::Configuration, e).with_context(key.to_owned())
    })?;

    let stored: &str = location.as_ref();
    if stored != key {
        tracing::error!(
            target: TRACING_TARGET,
            key = %key,
            stored = %stored,
            "object key would be rewritten by the store"
        );
        return Err(
            Error::configuration("object key cannot be stored verbatim")
                .with_context(key.to_owned()),
        );
    }

    Ok(location)
}

/// Streams `data` to `location` and commits the object.
///
/// Only a successful close commits. A failed or cancelled write aborts the
/// pending upload before returning.
async fn upload(
    store: Arc<dyn ObjectStore>,
    location: ObjectPath,
    data: &[u8],
    ctx: &PushContext,
) -> Result<()> {
    let key = location.to_string();
    let mut writer = BufWriter::new(store, location);

    let written = tokio::select! {
        biased;
        () = ctx.token().cancelled() => Err(Error::cancelled()),
        result = writer.write_all(data) => result.map_err(|e| remote_io(e, "write")),
    };

    if let Err(error) = written {
        if let Err(abort_error) = writer.abort().await {
            tracing::warn!(
                target: TRACING_TARGET,
                key = %key,
                error = %abort_error,
                "failed to abort upload"
            );
        }
        return Err(error);
    }

    tokio::select! {
        biased;
        () = ctx.token().cancelled() => Err(Error::cancelled()),
        result = writer.shutdown() => result.map_err(|e| remote_io(e, "close")),
    }
}

fn remote_io(error: std::io::Error, stage: &str) -> Error {
    tracing::error!(
        target: TRACING_TARGET,
        stage = stage,
        error = %error,
        "remote object write failed"
    );
    Error::from_source(ErrorKind::RemoteIo, error).with_context(stage.to_owned())
}

impl<C> std::fmt::Debug for GcsRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsRegistry")
            .field("config", &self.config)
            .field("ambient", &self.ambient)
            .finish_non_exhaustive()
    }
}
