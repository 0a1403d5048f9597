//! Host-supplied declaration model.
//!
//! Declarations arrive fully resolved: the front-end that produced them has
//! already parsed the source, qualified every class name, and turned each
//! annotation's keyed arguments into a map. Rules only read these values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Opaque annotation argument value. Rules never look inside it.
pub type ArgumentValue = serde_json::Value;

/// Metadata attached to a declaration, identified by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Canonical, fully-qualified annotation name.
    pub name: String,
    /// Keyed arguments. Positional arguments are not represented.
    #[serde(default)]
    pub arguments: BTreeMap<String, ArgumentValue>,
}

impl Annotation {
    /// Creates an annotation with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Adds a keyed argument.
    #[must_use]
    pub fn with_argument(mut self, key: impl Into<String>, value: ArgumentValue) -> Self {
        self.arguments.insert(key.into(), value);
        self
    }

    /// Returns true if the argument map contains `key`.
    #[must_use]
    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }
}

/// A class-like declaration under analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully-qualified class name (e.g. `App\Entity\Book`).
    pub name: String,
    /// Annotations in source order.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Source file the declaration came from, if the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Line of the declaration (1-indexed), if the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Declaration {
    /// Creates a declaration with no annotations.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Sets the source position reported by the host.
    #[must_use]
    pub fn at(mut self, file: impl Into<PathBuf>, line: usize) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Iterates annotations whose name equals `name` exactly, in source order.
    pub fn annotations_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Annotation> {
        self.annotations.iter().filter(move |a| a.name == name)
    }
}
