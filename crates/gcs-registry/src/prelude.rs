//! Prelude module for convenient imports.

pub use crate::artifact::Artifact;
pub use crate::component::{Configurable, ConfigurableNotify, PushContext, Registry};
pub use crate::config::{AmbientCredentials, RegistryConfig};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::registry::GcsRegistry;
pub use crate::storage::{GcsConnector, InMemoryConnector, StorageConnector};
pub use crate::ui::{Status, StatusGuard, Ui};
