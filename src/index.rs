//! The file metadata index and its YAML serialization.
//!
//! An [`Index`] records every file captured by a backup run, mapping the
//! local path to the key under which the file lives in the destination
//! bucket.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Result;

/// Metadata for a single backed up file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourcefile {
    /// Location of this file in the destination bucket.
    pub key: String,
}

/// All file metadata recorded for one backup run.
///
/// Serialized as a YAML mapping with a single top-level `files` key:
///
/// ```yaml
/// files:
///   data/report.txt:
///     key: mybucket/data/report.txt
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Maps the local file location to its metadata.
    #[serde(default)]
    pub files: HashMap<String, Sourcefile>,
}

impl Index {
    /// Parse an index from its YAML form.
    ///
    /// An empty document decodes to an empty index, as does a document
    /// without a `files` mapping. Unknown fields at any level are
    /// ignored so newer documents stay readable.
    pub fn decode(buf: &str) -> Result<Self> {
        if buf.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(buf)?)
    }

    /// Serialize the index as YAML.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
