//! # resource-lint-core
//!
//! Core framework for linting host-resolved class declarations.
//!
//! A front-end (for example a PHP parser) resolves class names and annotation
//! arguments and hands them over as [`Declaration`] values, usually through a
//! JSON [`Manifest`]. This crate provides:
//!
//! - the declaration model ([`Declaration`], [`Annotation`])
//! - the [`Rule`] trait for per-declaration rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] and [`LintResult`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use resource_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/declarations")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! println!("{}", result.summary());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod manifest;
mod model;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::DeclarationContext;
pub use manifest::{is_manifest, Manifest, ManifestError, MANIFEST_SUFFIX};
pub use model::{Annotation, ArgumentValue, Declaration};
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
