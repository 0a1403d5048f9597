//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# resource-lint configuration

# Exit with status 1 when a violation at or above this severity is found.
# fail_on = "error"

[analyzer]
# Directory searched for *.decl.json manifests (default: current directory)
# root = "./build/declarations"

# Glob patterns to exclude from manifest discovery
exclude = [
    "**/vendor/**",
    "**/node_modules/**",
]

[rules.api-resource-check]
enabled = true
# severity = "warning"  # Override default severity
# marker = "ApiPlatform\\Core\\Annotation\\ApiResource"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("resource-lint.toml"), force)?;

    println!("Created resource-lint.toml");
    println!("\nNext steps:");
    println!("  1. Export declarations from your front-end as *.decl.json");
    println!("  2. Run: resource-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_lint_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).expect("default config should parse");
        assert!(config.is_rule_enabled("api-resource-check"));
        assert_eq!(config.analyzer.exclude.len(), 2);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("resource-lint.toml");
        std::fs::write(&path, "# mine\n").expect("write");

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "# mine\n");

        write_config(&path, true).expect("forced write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), DEFAULT_CONFIG);
    }
}
