//! Storage connectors that turn a configuration into an object store handle.

mod gcs;
mod memory;

use std::sync::Arc;

pub use gcs::GcsConnector;
pub use memory::InMemoryConnector;
use object_store::ObjectStore;

use crate::config::RegistryConfig;
use crate::error::Result;

/// Factory for authenticated object store clients.
///
/// Implementations resolve credentials and construct a client scoped to
/// the configured bucket. The returned handle lives only for one push.
#[async_trait::async_trait]
pub trait StorageConnector: Send + Sync {
    /// Unique identifier (e.g. "gcs").
    fn id(&self) -> &'static str;

    /// Creates a client for `config.bucket`.
    async fn connect(&self, config: &RegistryConfig) -> Result<Arc<dyn ObjectStore>>;
}
