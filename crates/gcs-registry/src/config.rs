//! Registry configuration and credential validation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable consulted for ambient credentials.
pub const AMBIENT_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Whether an ambient credential reference is available to the process.
///
/// Validation takes this as an explicit input so that it never reads the
/// process environment itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientCredentials(bool);

impl AmbientCredentials {
    /// An ambient credential reference is present.
    pub const fn available() -> Self {
        Self(true)
    }

    /// No ambient credential reference is present.
    pub const fn unavailable() -> Self {
        Self(false)
    }

    /// Checks [`AMBIENT_CREDENTIALS_ENV`] for a non-empty value.
    ///
    /// Only presence is checked; the referenced file is not opened.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(AMBIENT_CREDENTIALS_ENV).as_deref())
    }

    /// Interprets a value of [`AMBIENT_CREDENTIALS_ENV`]; unset and empty
    /// both mean unavailable.
    pub fn from_value(value: Option<&OsStr>) -> Self {
        Self(value.is_some_and(|v| !v.is_empty()))
    }

    /// Returns `true` if an ambient credential reference is present.
    pub const fn is_available(&self) -> bool {
        self.0
    }
}

/// Configuration of the registry push stage, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Destination bucket name.
    pub bucket: String,
    /// Destination object's base name, usually the artifact file name.
    pub object_name: String,
    /// Destination key prefix. Empty means the bucket root.
    pub object_path: String,
    /// Local path of the artifact to upload.
    pub file_path: PathBuf,
    /// Path to a service-account credential file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_path: Option<PathBuf>,
}

impl RegistryConfig {
    /// Creates a new configuration without an explicit credential file.
    pub fn new(
        bucket: impl Into<String>,
        object_name: impl Into<String>,
        object_path: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            object_name: object_name.into(),
            object_path: object_path.into(),
            file_path: file_path.into(),
            credential_path: None,
        }
    }

    /// Sets the service-account credential file.
    pub fn with_credential_path(mut self, credential_path: impl Into<PathBuf>) -> Self {
        self.credential_path = Some(credential_path.into());
        self
    }

    /// Returns the credential file path, treating an empty path as unset.
    pub fn credential_path(&self) -> Option<&Path> {
        self.credential_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Returns `true` if a non-empty credential file path is configured.
    pub fn has_credential_path(&self) -> bool {
        self.credential_path().is_some()
    }

    /// Destination key: `object_path` immediately followed by `object_name`.
    ///
    /// No separator is inserted and nothing is normalized.
    pub fn object_key(&self) -> String {
        format!("{}{}", self.object_path, self.object_name)
    }

    /// Checks that at least one credential source is resolvable.
    ///
    /// Fails if and only if no credential path is configured and no ambient
    /// credential is available. No other field is checked here.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when credentials are not set.
    pub fn validate(&self, ambient: AmbientCredentials) -> Result<()> {
        if !ambient.is_available() && !self.has_credential_path() {
            return Err(Error::configuration("GCS credentials are not set"));
        }

        Ok(())
    }
}
