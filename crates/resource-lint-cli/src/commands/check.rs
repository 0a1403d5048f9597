//! Check command implementation.

use anyhow::{Context, Result};
use resource_lint_core::{Analyzer, Config, RuleBox};
use resource_lint_rules::{configured_rules, rule_by_name};
use std::collections::HashSet;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options collected from the `check` subcommand.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes, if filtering.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Fail on malformed manifests.
    pub strict: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let fail_on = config
        .fail_threshold()
        .context("Invalid `fail_on` in config")?;

    let rules = match &options.rules {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names, &config)
        }
        None => configured_rules(&config),
    };

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_parse_error(options.strict);

    for pattern in &options.exclude {
        builder = builder.exclude(pattern.as_str());
    }

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves `--rules` entries, which may mix names and codes.
///
/// A rule selected twice (e.g. by name and by code) is registered once.
fn filter_rules(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();
    let mut seen = HashSet::new();

    for name in names {
        match rule_by_name(name, config) {
            Some(rule) if !seen.insert(rule.name()) => {
                tracing::debug!("Rule {} already selected, skipping {}", rule.name(), name);
            }
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    use resource_lint_core::{Annotation, Declaration};
    use resource_lint_rules::TARGET_MARKER;

    #[test]
    fn filter_accepts_names_and_codes() {
        let config = Config::default();
        let rules = filter_rules(&["RL001", "bogus"], &config);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), "api-resource-check");

        assert!(filter_rules(&["bogus"], &config).is_empty());
    }

    #[test]
    fn filter_registers_rule_once_when_named_twice() {
        let config = Config::default();
        let rules = filter_rules(&["api-resource-check", "RL001", "api-resource-check"], &config);
        assert_eq!(rules.len(), 1);

        let mut builder = Analyzer::builder().root(".");
        for rule in rules {
            builder = builder.rule_box(rule);
        }
        let analyzer = builder.build().expect("analyzer should build");

        let empty = Declaration::new("App\\Entity\\Empty")
            .with_annotation(Annotation::new(TARGET_MARKER));
        let result = analyzer.check_declarations(&[empty]);
        assert_eq!(result.violations.len(), 4);
    }
}
