//! End-to-end: a front-end manifest checked by the api-resource-check rule.

use resource_lint_core::{Analyzer, Config, Severity};
use resource_lint_rules::{configured_rules, ApiResourceCheck};
use std::fs;
use tempfile::TempDir;

const ENTITIES: &str = r#"{
  "declarations": [
    {
      "name": "App\\Entity\\Book",
      "file": "src/Entity/Book.php",
      "line": 14,
      "annotations": [
        {
          "name": "ApiPlatform\\Core\\Annotation\\ApiResource",
          "arguments": {
            "itemOperations": { "get": {} },
            "denormalizationContext": { "groups": ["book:write"] },
            "normalizationContext": { "groups": ["book:read"] }
          }
        }
      ]
    },
    {
      "name": "App\\Entity\\Empty",
      "file": "src/Entity/Empty.php",
      "line": 8,
      "annotations": [ { "name": "ApiPlatform\\Core\\Annotation\\ApiResource" } ]
    },
    {
      "name": "App\\Entity\\Full",
      "file": "src/Entity/Full.php",
      "line": 10,
      "annotations": [
        {
          "name": "ApiPlatform\\Core\\Annotation\\ApiResource",
          "arguments": {
            "collectionOperations": {},
            "itemOperations": {},
            "denormalizationContext": {},
            "normalizationContext": {},
            "attributes": { "security": "is_granted('ROLE_USER')" }
          }
        }
      ]
    },
    { "name": "App\\Entity\\Plain", "file": "src/Entity/Plain.php", "line": 5 },
    {
      "name": "App\\Entity\\OtherAnnotated",
      "file": "src/Entity/OtherAnnotated.php",
      "line": 7,
      "annotations": [ { "name": "Doctrine\\ORM\\Mapping\\Entity" } ]
    }
  ]
}"#;

fn project() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("entities.decl.json"), ENTITIES).expect("write manifest");
    tmp
}

#[test]
fn reports_each_missing_key_per_class() {
    let tmp = project();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(ApiResourceCheck::new())
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert_eq!(result.declarations_checked, 5);

    let messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Collection operations is not set in class App\\Entity\\Book.",
            "Collection operations is not set in class App\\Entity\\Empty.",
            "Item operations is not set in class App\\Entity\\Empty.",
            "Denormalization context is not set in class App\\Entity\\Empty.",
            "Normalization context is not set in class App\\Entity\\Empty.",
        ]
    );
    assert!(result.for_declaration("App\\Entity\\Full").is_empty());
    assert!(result.for_declaration("App\\Entity\\Plain").is_empty());
    assert!(result.for_declaration("App\\Entity\\OtherAnnotated").is_empty());
    assert!(result.has_errors());
}

#[test]
fn configured_marker_and_severity_apply() {
    let tmp = project();
    let config = Config::parse(
        r#"
[rules.api-resource-check]
severity = "warning"
marker = "Doctrine\\ORM\\Mapping\\Entity"
"#,
    )
    .expect("config should parse");

    let mut builder = Analyzer::builder().root(tmp.path()).config(config.clone());
    for rule in configured_rules(&config) {
        builder = builder.rule_box(rule);
    }
    let result = builder
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.violations.len(), 4);
    assert!(result
        .violations
        .iter()
        .all(|v| v.declaration == "App\\Entity\\OtherAnnotated" && v.severity == Severity::Warning));
    assert!(!result.has_errors());
}
