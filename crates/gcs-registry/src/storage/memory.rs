//! In-process object store for dry runs and tests.

use std::sync::Arc;

use object_store::ObjectStore;
use object_store::memory::InMemory;

use super::StorageConnector;
use crate::config::RegistryConfig;
use crate::error::Result;

/// Connector backed by a shared [`InMemory`] store.
///
/// Every connection returns the same store, so objects pushed through it
/// can be read back with [`store`](Self::store). The bucket name is not
/// checked.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnector {
    store: Arc<InMemory>,
}

impl InMemoryConnector {
    /// Creates a connector with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the backing store.
    pub fn store(&self) -> Arc<InMemory> {
        self.store.clone()
    }
}

#[async_trait::async_trait]
impl StorageConnector for InMemoryConnector {
    fn id(&self) -> &'static str {
        "memory"
    }

    async fn connect(&self, _config: &RegistryConfig) -> Result<Arc<dyn ObjectStore>> {
        let store: Arc<dyn ObjectStore> = self.store.clone();
        Ok(store)
    }
}
