//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::DeclarationContext;
use crate::manifest::{is_manifest, Manifest, ManifestError, MANIFEST_SUFFIX};
use crate::model::Declaration;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Source label used for declarations handed over in memory.
const IN_MEMORY_SOURCE: &str = "<input>";

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading a declaration manifest.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory (or single manifest file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on malformed manifests (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend([
                "**/vendor/**".to_string(),
                "**/node_modules/**".to_string(),
            ]);
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads every manifest under the root and checks its declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if manifest discovery fails, if a manifest cannot be
    /// read, or if a manifest is malformed and `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let manifests = self.discover_manifests()?;
        let base = self.base_dir();

        info!("Found {} manifest(s) to analyze", manifests.len());

        for path in &manifests {
            debug!("Loading: {}", path.display());
            let manifest = match Manifest::from_file(path) {
                Ok(manifest) => manifest,
                Err(e @ ManifestError::Invalid { .. }) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    if self.fail_on_parse_error {
                        return Err(e.into());
                    }
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let ctx = DeclarationContext::new(path, base);
            for decl in &manifest.declarations {
                result.violations.extend(self.check_declaration(&ctx, decl));
            }
            result.declarations_checked += manifest.declarations.len();
            result.manifests_checked += 1;
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} declarations",
            result.violations.len(),
            result.declarations_checked
        );

        Ok(result)
    }

    /// Checks declarations supplied directly by an embedding host.
    ///
    /// Violation order follows the input order: declarations first, then
    /// rules in registration order.
    #[must_use]
    pub fn check_declarations(&self, declarations: &[Declaration]) -> LintResult {
        let source = Path::new(IN_MEMORY_SOURCE);
        let ctx = DeclarationContext::new(source, &self.root);

        let mut result = LintResult::new();
        for decl in declarations {
            result.violations.extend(self.check_declaration(&ctx, decl));
        }
        result.declarations_checked = declarations.len();
        result
    }

    /// Runs every enabled rule against one declaration.
    fn check_declaration(&self, ctx: &DeclarationContext, decl: &Declaration) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(ctx, decl);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Directory locations are reported relative to.
    fn base_dir(&self) -> &Path {
        if self.root.is_file() {
            self.root.parent().unwrap_or(self.root.as_path())
        } else {
            &self.root
        }
    }

    /// Discovers all declaration manifests to analyze.
    fn discover_manifests(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            if !is_manifest(&self.root) {
                debug!(
                    "Root {} lacks the {} suffix, loading it anyway",
                    self.root.display(),
                    MANIFEST_SUFFIX
                );
            }
            return Ok(vec![self.root.clone()]);
        }

        let pattern = format!("{}/**/*{}", self.root.display(), MANIFEST_SUFFIX);
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

            if !path.is_file() {
                debug!("Skipping non-file match: {}", path.display());
                continue;
            }

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/vendor/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/vendor/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/vendor/**")
            .exclude("**/generated/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/app/vendor/pkg/a.decl.json")));
        assert!(analyzer.should_exclude(Path::new("/app/generated/a.decl.json")));
        assert!(!analyzer.should_exclude(Path::new("/app/build/a.decl.json")));
    }

    #[test]
    fn test_default_excludes() {
        let analyzer = Analyzer::builder()
            .root(".")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/app/node_modules/x/a.decl.json")));
    }

    #[test]
    fn test_no_rules_no_violations() {
        let analyzer = Analyzer::builder()
            .root(".")
            .build()
            .expect("Failed to build analyzer");
        let result = analyzer.check_declarations(&[Declaration::new("App\\Entity\\Book")]);
        assert!(result.violations.is_empty());
        assert_eq!(result.declarations_checked, 1);
    }
}
