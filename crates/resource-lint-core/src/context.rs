//! Context types for rule execution.

use crate::model::Declaration;
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to rules alongside each declaration.
///
/// Carries where the declaration was loaded from so rules can attach a
/// location to their findings without knowing about manifests.
#[derive(Debug, Clone)]
pub struct DeclarationContext<'a> {
    /// Path of the manifest the declaration was loaded from.
    pub source: &'a Path,
    /// Manifest path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> DeclarationContext<'a> {
    /// Creates a new context for declarations loaded from `source`.
    #[must_use]
    pub fn new(source: &'a Path, root: &Path) -> Self {
        let relative_path = source
            .strip_prefix(root)
            .map_or_else(|_| source.to_path_buf(), Path::to_path_buf);

        Self {
            source,
            relative_path,
        }
    }

    /// Location to report for `decl`.
    ///
    /// Prefers the host-supplied source position and falls back to the
    /// manifest itself at line 0.
    #[must_use]
    pub fn location_for(&self, decl: &Declaration) -> Location {
        let file = decl
            .file
            .clone()
            .unwrap_or_else(|| self.relative_path.clone());
        match decl.line {
            Some(line) => Location::new(file, line, 1),
            None => Location::new(file, 0, 0),
        }
    }
}
