//! Core types for lint violations and results.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Source location reported for a violation.
///
/// Positions come from the host; a declaration without one is reported at
/// line 0 of the manifest it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as reported by the host, or the manifest path.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 if unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 if unknown).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "RL001").
    pub code: String,
    /// Rule name (e.g., "api-resource-check").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Fully-qualified name of the offending declaration.
    pub declaration: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        declaration: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            declaration: declaration.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// A violation adapted for miette's graphical report handler.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of manifests loaded.
    pub manifests_checked: usize,
    /// Number of declarations checked.
    pub declarations_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations reported against the named declaration.
    #[must_use]
    pub fn for_declaration(&self, name: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.declaration == name)
            .collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.violations.iter().filter(|v| v.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// One-line summary of the run.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings, infos) = self.count_by_severity();
        format!(
            "Found {} error(s), {} warning(s), {} info(s) in {} declaration(s) from {} manifest(s)",
            errors, warnings, infos, self.declarations_checked, self.manifests_checked
        )
    }

    /// Sorts violations by file, then line, then column.
    ///
    /// The sort is stable, so findings at the same position keep rule order.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity, line: usize) -> Violation {
        Violation::new(
            "RL001",
            "api-resource-check",
            severity,
            Location::new(PathBuf::from("src/Entity/Book.php"), line, 1),
            "App\\Entity\\Book",
            "Item operations is not set in class App\\Entity\\Book.",
        )
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn diagnostic_carries_suggestion_as_help() {
        let v = make_violation(Severity::Error, 3)
            .with_suggestion(Suggestion::new("Add `itemOperations`"));
        let diagnostic = ViolationDiagnostic::from(&v);
        assert_eq!(
            diagnostic.to_string(),
            "[RL001] Item operations is not set in class App\\Entity\\Book."
        );
        let help = diagnostic.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("Add `itemOperations`"));
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Warning, 7);
        assert_eq!(
            v.to_string(),
            "src/Entity/Book.php:7:1: warning [RL001] Item operations is not set in class App\\Entity\\Book."
        );
    }

    #[test]
    fn has_violations_at_respects_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning, 1));
        assert!(!result.has_errors());
        assert!(result.has_violations_at(Severity::Warning));
        assert!(result.has_violations_at(Severity::Info));
    }

    #[test]
    fn sort_orders_by_line_and_keeps_ties_stable() {
        let mut result = LintResult::new();
        let mut first = make_violation(Severity::Error, 5);
        first.message = "first".into();
        let mut second = make_violation(Severity::Error, 5);
        second.message = "second".into();
        result.violations.push(first);
        result.violations.push(make_violation(Severity::Error, 2));
        result.violations.push(second);

        result.sort();
        let lines: Vec<_> = result.violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![2, 5, 5]);
        assert_eq!(result.violations[1].message, "first");
        assert_eq!(result.violations[2].message, "second");
    }

    #[test]
    fn summary_counts_everything() {
        let mut result = LintResult::new();
        result.manifests_checked = 1;
        result.declarations_checked = 4;
        result.violations.push(make_violation(Severity::Error, 1));
        result.violations.push(make_violation(Severity::Info, 2));
        assert_eq!(
            result.summary(),
            "Found 1 error(s), 0 warning(s), 1 info(s) in 4 declaration(s) from 1 manifest(s)"
        );
        assert_eq!(result.for_declaration("App\\Entity\\Book").len(), 2);
    }
}
