#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod artifact;
mod component;
mod config;
mod error;
mod registry;
mod storage;
mod ui;

#[doc(hidden)]
pub mod prelude;

pub use artifact::Artifact;
pub use component::{Configurable, ConfigurableNotify, PushContext, Registry};
pub use config::{AMBIENT_CREDENTIALS_ENV, AmbientCredentials, RegistryConfig};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use registry::{GcsRegistry, PUSH_STATUS_MESSAGE};
pub use storage::{GcsConnector, InMemoryConnector, StorageConnector};
pub use ui::{Status, StatusGuard, Ui};

/// Tracing target for registry operations.
pub const TRACING_TARGET: &str = "gcs_registry";
