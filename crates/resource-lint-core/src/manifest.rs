//! Declaration manifests produced by an external front-end.
//!
//! A manifest is a JSON document listing already-resolved declarations:
//!
//! ```json
//! { "declarations": [
//!     { "name": "App\\Entity\\Book", "file": "src/Entity/Book.php", "line": 12,
//!       "annotations": [ { "name": "ApiPlatform\\Core\\Annotation\\ApiResource",
//!                          "arguments": { "itemOperations": {} } } ] } ] }
//! ```

use crate::model::Declaration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File suffix used when discovering manifests under a directory.
pub const MANIFEST_SUFFIX: &str = ".decl.json";

/// Origin reported for manifests parsed from a string.
const INLINE_ORIGIN: &str = "<inline>";

/// A set of declarations loaded from one manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declarations in the order the front-end emitted them.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl Manifest {
    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_from(&content, path)
    }

    /// Parses a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not match the schema.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        Self::parse_from(content, Path::new(INLINE_ORIGIN))
    }

    fn parse_from(content: &str, origin: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| ManifestError::Invalid {
            path: origin.to_path_buf(),
            source: e,
        })
    }
}

/// Returns true if `path` looks like a declaration manifest.
#[must_use]
pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(MANIFEST_SUFFIX))
}

/// Manifest loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// IO error reading a manifest.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed manifest file.
    #[error("Invalid manifest {path}: {source}")]
    Invalid {
        /// Manifest path, or `<inline>` for string input.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
