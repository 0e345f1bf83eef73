//! Rule trait for defining markup lint rules.

use crate::context::DocumentContext;
use crate::markup::MarkupElement;
use crate::types::{Severity, Violation};

/// A per-document lint rule over the extracted markup elements.
///
/// Rules receive the flat, document-ordered element list produced by a
/// [`TemplateExtractor`](crate::TemplateExtractor).
///
/// # Example
///
/// ```ignore
/// use uas_lint_core::{DocumentContext, MarkupElement, Rule, Violation};
///
/// pub struct NoDeprecatedTags;
///
/// impl Rule for NoDeprecatedTags {
///     fn name(&self) -> &'static str { "no-deprecated-tags" }
///     fn code(&self) -> &'static str { "UAS900" }
///
///     fn check(&self, ctx: &DocumentContext, elements: &[MarkupElement]) -> Vec<Violation> {
///         elements
///             .iter()
///             .filter(|e| e.tag == "marquee")
///             .map(|e| ctx.violation(self, e.span, "<marquee> is deprecated"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "require-component-attributes").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "UAS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns `true` when this rule can never report anything.
    ///
    /// The analyzer skips the file walk entirely when every rule is inert.
    fn is_inert(&self) -> bool {
        false
    }

    /// Checks a single document and returns any violations found.
    fn check(&self, ctx: &DocumentContext, elements: &[MarkupElement]) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
