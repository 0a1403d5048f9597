//! List rules command implementation.

use resource_lint_rules::{all_rules, RequiredKey, TARGET_MARKER};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!();
    for line in required_keys_table() {
        println!("{line}");
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  resource-lint check --rules api-resource-check");
    println!("  resource-lint check --rules RL001");
}

/// Marker and required keys checked by `api-resource-check`.
fn required_keys_table() -> Vec<String> {
    let mut lines = vec![
        format!("Target annotation: {TARGET_MARKER}"),
        "Required keys:".to_string(),
    ];
    lines.extend(
        RequiredKey::ALL
            .iter()
            .map(|key| format!("  {:<25} {}", key.key(), key.concept())),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_marker_and_keys_in_order() {
        let lines = required_keys_table();
        assert_eq!(
            lines[0],
            "Target annotation: ApiPlatform\\Core\\Annotation\\ApiResource"
        );
        let keys: Vec<&str> = lines[2..]
            .iter()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "collectionOperations",
                "itemOperations",
                "denormalizationContext",
                "normalizationContext",
            ]
        );
        assert!(lines[3].ends_with("Item operations"));
    }
}
