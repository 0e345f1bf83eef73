//! Rule to require configured attributes on configured UI components.
//!
//! # Rationale
//!
//! Design systems often need every `<el-input>` to carry a `maxlength`, or
//! every numeric input to carry `min`/`max`. The components and their
//! required attributes come from [`RuleOptions`].
//!
//! # Detected Patterns
//!
//! - A matched element without the attribute, reported at the start tag
//! - A literal attribute with a blank value (`maxlength=""`), reported at
//!   the attribute, unless the requirement allows empty values
//!
//! # Good Patterns
//!
//! ```html
//! <el-input maxlength="50" show-word-limit />
//! <el-input :maxlength="limit" show-word-limit />
//! ```

use std::sync::Arc;

use tracing::debug;
use uas_lint_core::attribute::{attribute_name, is_empty};
use uas_lint_core::{
    AttributeRequirement, ComponentRule, DocumentContext, MarkupElement, Rule, RuleOptions,
    RuleRegistry, Severity, Suggestion, Violation,
};

/// Rule code for require-component-attributes.
pub const CODE: &str = "UAS001";

/// Rule name for require-component-attributes.
pub const NAME: &str = "require-component-attributes";

/// One missing or empty required attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAttribute {
    /// Index of the offending element.
    pub element: usize,
    /// Index of the offending attribute when it is present but empty.
    pub attribute: Option<usize>,
    /// Component label used in the message.
    pub component: String,
    /// Required attribute name.
    pub name: String,
    /// Reason appended to the message.
    pub reason: Option<String>,
    /// Help text.
    pub suggestion: Option<String>,
}

impl MissingAttribute {
    fn new(
        element: usize,
        attribute: Option<usize>,
        rule: &ComponentRule,
        requirement: &AttributeRequirement,
    ) -> Self {
        Self {
            element,
            attribute,
            component: rule.label().to_string(),
            name: requirement.name().to_string(),
            reason: requirement.reason().map(String::from),
            suggestion: requirement.suggestion().map(String::from),
        }
    }

    /// Renders the report message.
    ///
    /// ```
    /// # use uas_lint_rules::MissingAttribute;
    /// let missing = MissingAttribute {
    ///     element: 0,
    ///     attribute: None,
    ///     component: "ElInput".into(),
    ///     name: "maxlength".into(),
    ///     reason: Some("limit input".into()),
    ///     suggestion: None,
    /// };
    /// assert_eq!(
    ///     missing.message(),
    ///     "Component <ElInput> must define attribute \"maxlength\" (limit input)."
    /// );
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        let reason = self
            .reason
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default();
        format!(
            "Component <{}> must define attribute \"{}\"{reason}.",
            self.component, self.name
        )
    }
}

/// Checks every element against the registry.
///
/// Results are ordered by element, then by requirement declaration order.
/// Absence is always reported; `allow_empty` only suppresses the
/// present-but-empty case.
#[must_use]
pub fn check_elements(registry: &RuleRegistry, elements: &[MarkupElement]) -> Vec<MissingAttribute> {
    if registry.is_empty() {
        return Vec::new();
    }

    let mut missing = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        let Some(rule) = registry.lookup(&element.tag) else {
            continue;
        };

        for requirement in rule.attributes() {
            let found = element
                .attributes
                .iter()
                .position(|attr| attribute_name(attr) == requirement.name());
            match found {
                None => missing.push(MissingAttribute::new(index, None, rule, requirement)),
                Some(i) if !requirement.allows_empty() && is_empty(&element.attributes[i]) => {
                    missing.push(MissingAttribute::new(index, Some(i), rule, requirement));
                }
                Some(_) => {}
            }
        }
    }
    missing
}

/// Requires configured components to declare configured attributes.
#[derive(Debug, Clone)]
pub struct RequireComponentAttributes {
    registry: Arc<RuleRegistry>,
    /// Severity level.
    pub severity: Severity,
}

impl Default for RequireComponentAttributes {
    fn default() -> Self {
        Self::new(RuleRegistry::new())
    }
}

impl RequireComponentAttributes {
    /// Creates the rule over an already built registry.
    #[must_use]
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            severity: Severity::Error,
        }
    }

    /// Builds the registry from rule options.
    #[must_use]
    pub fn from_options(options: &RuleOptions) -> Self {
        let registry = RuleRegistry::build(options);
        debug!(
            "{NAME}: {} components under {} keys",
            registry.rules().len(),
            registry.len()
        );
        Self::new(registry)
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The registry this rule checks against.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

impl Rule for RequireComponentAttributes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires configured UI components to declare configured attributes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_inert(&self) -> bool {
        self.registry.is_empty()
    }

    fn check(&self, ctx: &DocumentContext, elements: &[MarkupElement]) -> Vec<Violation> {
        check_elements(&self.registry, elements)
            .into_iter()
            .filter_map(|missing| {
                let element = elements.get(missing.element)?;
                let span = missing
                    .attribute
                    .and_then(|i| element.attributes.get(i))
                    .map_or(element.span, |attr| attr.span());

                let mut violation = ctx.violation(self, span, missing.message());
                if let Some(suggestion) = missing.suggestion {
                    violation = violation.with_suggestion(Suggestion::new(suggestion));
                }
                Some(violation)
            })
            .collect()
    }
}
