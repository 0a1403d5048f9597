//! Rule requiring API resources to spell out their operations and
//! serialization contexts.
//!
//! # Rationale
//!
//! An `#[ApiResource]` class without explicit `collectionOperations` and
//! `itemOperations` exposes every default operation, and one without
//! `normalizationContext`/`denormalizationContext` serializes every property.
//! Both are easy to miss in review.
//!
//! # Detected Patterns
//!
//! ```php
//! #[ApiResource(itemOperations: ['get'])]
//! class Book {}
//! // Collection operations is not set in class App\Entity\Book.
//! // Denormalization context is not set in class App\Entity\Book.
//! // Normalization context is not set in class App\Entity\Book.
//! ```
//!
//! Only the presence of each key is checked, never its value.

use resource_lint_core::{
    Declaration, DeclarationContext, Rule, RuleConfig, Severity, Suggestion, Violation,
};
use tracing::debug;

/// Rule code for api-resource-check.
pub const CODE: &str = "RL001";

/// Rule name for api-resource-check.
pub const NAME: &str = "api-resource-check";

/// Fully-qualified name of the annotation this rule inspects.
pub const TARGET_MARKER: &str = "ApiPlatform\\Core\\Annotation\\ApiResource";

/// Configuration key every resource annotation must set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredKey {
    /// `collectionOperations`
    CollectionOperations,
    /// `itemOperations`
    ItemOperations,
    /// `denormalizationContext`
    DenormalizationContext,
    /// `normalizationContext`
    NormalizationContext,
}

impl RequiredKey {
    /// Every required key, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::CollectionOperations,
        Self::ItemOperations,
        Self::DenormalizationContext,
        Self::NormalizationContext,
    ];

    /// Argument name as written in the annotation.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CollectionOperations => "collectionOperations",
            Self::ItemOperations => "itemOperations",
            Self::DenormalizationContext => "denormalizationContext",
            Self::NormalizationContext => "normalizationContext",
        }
    }

    /// Human-readable concept used in messages.
    #[must_use]
    pub const fn concept(self) -> &'static str {
        match self {
            Self::CollectionOperations => "Collection operations",
            Self::ItemOperations => "Item operations",
            Self::DenormalizationContext => "Denormalization context",
            Self::NormalizationContext => "Normalization context",
        }
    }
}

impl std::fmt::Display for RequiredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A required key absent from a resource annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingRequiredKey {
    /// The missing key.
    pub key: RequiredKey,
    /// Fully-qualified name of the offending class.
    pub class: String,
}

impl std::fmt::Display for MissingRequiredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not set in class {}.",
            self.key.concept(),
            self.class
        )
    }
}

/// Checks that resource annotations set every [`RequiredKey`].
#[derive(Debug, Clone)]
pub struct ApiResourceCheck {
    /// Severity level.
    pub severity: Severity,
    /// Annotation name to match, compared by exact equality.
    pub marker: String,
}

impl Default for ApiResourceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiResourceCheck {
    /// Creates a new rule matching [`TARGET_MARKER`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            marker: TARGET_MARKER.to_string(),
        }
    }

    /// Creates a rule from its `[rules.api-resource-check]` config block.
    ///
    /// Recognized options: `marker`.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new().with_marker(config.get_str("marker", TARGET_MARKER))
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Matches a different annotation name.
    ///
    /// The name must be canonical and fully qualified; no namespace
    /// shortening or alias resolution is attempted.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Returns one finding per required key missing from each matching
    /// annotation, in annotation order and then [`RequiredKey::ALL`] order.
    #[must_use]
    pub fn validate(&self, decl: &Declaration) -> Vec<MissingRequiredKey> {
        let mut missing = Vec::new();

        for annotation in decl.annotations_named(&self.marker) {
            debug!("{} carries {}", decl.name, self.marker);
            missing.extend(
                RequiredKey::ALL
                    .into_iter()
                    .filter(|key| !annotation.has_argument(key.key()))
                    .map(|key| MissingRequiredKey {
                        key,
                        class: decl.name.clone(),
                    }),
            );
        }

        missing
    }
}

impl Rule for ApiResourceCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires operations and (de)normalization contexts on API resources"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &DeclarationContext, decl: &Declaration) -> Vec<Violation> {
        self.validate(decl)
            .into_iter()
            .map(|finding| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location_for(decl),
                    &decl.name,
                    finding.to_string(),
                )
                .with_suggestion(Suggestion::new(format!(
                    "Add a `{}` argument to the resource annotation",
                    finding.key
                )))
            })
            .collect()
    }
}
