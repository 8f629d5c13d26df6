//! Result descriptor handed to later pipeline stages.

use serde::{Deserialize, Serialize};

/// Location of a successfully pushed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Bucket the object was written to.
    pub bucket: String,
    /// Full key under which the object is stored.
    pub object_path: String,
}

impl Artifact {
    pub(crate) fn new(bucket: impl Into<String>, object_path: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object_path: object_path.into(),
        }
    }
}
