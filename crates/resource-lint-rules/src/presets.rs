//! Rule registry.

use crate::ApiResourceCheck;
use resource_lint_core::{Config, RuleBox};

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(ApiResourceCheck::new())]
}

/// Returns all available rules, configured from `config`.
///
/// Rule options (such as `marker`) are read from each rule's
/// `[rules.<name>]` block. Enabling and severity overrides are applied
/// later by the analyzer.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let api_resource = config
        .rule(crate::api_resource_check::NAME)
        .map_or_else(ApiResourceCheck::new, ApiResourceCheck::from_config);

    vec![Box::new(api_resource)]
}

/// Looks up a rule by name or code, configured from `config`.
#[must_use]
pub fn rule_by_name(name: &str, config: &Config) -> Option<RuleBox> {
    configured_rules(config)
        .into_iter()
        .find(|rule| rule.name() == name || rule.code() == name)
}
