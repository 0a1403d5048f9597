//! # resource-lint-rules
//!
//! Built-in lint rules for resource-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | RL001 | `api-resource-check` | Requires operations and (de)normalization contexts on `ApiResource` classes |
//!
//! ## Usage
//!
//! ```ignore
//! use resource_lint_core::Analyzer;
//! use resource_lint_rules::ApiResourceCheck;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/declarations")
//!     .rule(ApiResourceCheck::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api_resource_check;
mod presets;

pub use api_resource_check::{ApiResourceCheck, MissingRequiredKey, RequiredKey, TARGET_MARKER};
pub use presets::{all_rules, configured_rules, rule_by_name};

/// Re-export core types for convenience.
pub use resource_lint_core::{Rule, Severity, Violation};
