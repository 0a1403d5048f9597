//! Rule trait for defining declaration lint rules.

use crate::context::DeclarationContext;
use crate::model::Declaration;
use crate::types::{Severity, Violation};

/// A per-declaration lint rule.
///
/// Rules receive one resolved [`Declaration`] at a time and must not keep
/// state between calls, so the same instance can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use resource_lint_core::{Declaration, DeclarationContext, Rule, Severity, Violation};
///
/// pub struct RequireAnnotations;
///
/// impl Rule for RequireAnnotations {
///     fn name(&self) -> &'static str { "require-annotations" }
///     fn code(&self) -> &'static str { "RL900" }
///
///     fn check(&self, ctx: &DeclarationContext, decl: &Declaration) -> Vec<Violation> {
///         if decl.annotations.is_empty() {
///             vec![Violation::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 ctx.location_for(decl),
///                 &decl.name,
///                 format!("Class {} has no annotations.", decl.name),
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "api-resource-check").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "RL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single declaration and returns any violations found, in a
    /// deterministic order.
    fn check(&self, ctx: &DeclarationContext, decl: &Declaration) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &DeclarationContext, decl: &Declaration) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                ctx.location_for(decl),
                &decl.name,
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let ctx = DeclarationContext::new(Path::new("a.decl.json"), Path::new("."));
        let violations = rule.check(&ctx, &Declaration::new("App\\Entity\\Book"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].declaration, "App\\Entity\\Book");
    }
}
