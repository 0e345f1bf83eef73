//! # uas-lint-core
//!
//! Core framework for linting UI component attributes in markup templates.
//!
//! This crate provides the foundational types for building component
//! attribute linters. It includes:
//!
//! - [`MarkupElement`] / [`MarkupAttribute`], the read-only template view
//! - [`naming`] for reconciling `el-input`, `ElInput` and `EL_INPUT`
//! - [`attribute`] for classifying literal and bound attributes
//! - [`RuleRegistry`] built from declarative [`RuleOptions`]
//! - [`Rule`] trait and the [`Analyzer`] that walks a project
//!
//! ## Example
//!
//! ```ignore
//! use uas_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(HtmlTemplateExtractor::new())
//!     .rule(RequireComponentAttributes::new(registry))
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub mod attribute;
pub mod declarative;
pub mod markup;
pub mod naming;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::DocumentContext;
pub use declarative::{
    AttributeRequirement, ComponentRule, LoadRulesError, RuleGroup, RuleOptions, RuleRegistry,
};
pub use markup::{MarkupAttribute, MarkupElement, Span, TemplateExtractor};
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
