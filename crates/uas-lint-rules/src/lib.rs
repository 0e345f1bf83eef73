//! # uas-lint-rules
//!
//! Built-in lint rules for uas-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | UAS001 | `require-component-attributes` | Requires configured UI components to declare configured attributes |
//!
//! ## Usage
//!
//! ```ignore
//! use uas_lint_core::Analyzer;
//! use uas_lint_rules::{Preset, RequireComponentAttributes};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(HtmlTemplateExtractor::new())
//!     .rule(RequireComponentAttributes::from_options(&Preset::Recommended.options()))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;
mod require_component_attributes;

pub use presets::{recommended_options, Preset, UnknownPreset};
pub use require_component_attributes::{check_elements, MissingAttribute, RequireComponentAttributes};

/// Re-export core types for convenience.
pub use uas_lint_core::{Rule, Severity, Violation};
