//! Pure domain model for component attribute rules.
//!
//! This module contains no serde and no I/O. Values arrive here from the
//! loader (TOML) or are built directly in code (presets, tests).

use std::fmt;

// ────────────────────────────────────────────
// Requirements
// ────────────────────────────────────────────

/// One attribute a component must declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRequirement {
    name: String,
    allow_empty: bool,
    reason: Option<String>,
    suggestion: Option<String>,
}

impl AttributeRequirement {
    /// Creates a requirement that rejects empty values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allow_empty: false,
            reason: None,
            suggestion: None,
        }
    }

    /// Accepts a declared-but-empty value (boolean attributes).
    #[must_use]
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Sets the reason appended to the violation message.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the help text attached to violations.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether an empty value satisfies the requirement.
    #[must_use]
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Returns the reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the suggestion, if any.
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

impl From<&str> for AttributeRequirement {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ────────────────────────────────────────────
// Component rules
// ────────────────────────────────────────────

/// A component together with the attributes it must declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRule {
    component: String,
    match_names: Vec<String>,
    display_name: Option<String>,
    library: Option<String>,
    attributes: Vec<AttributeRequirement>,
}

impl ComponentRule {
    /// Creates a rule for `component` with no requirements yet.
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            match_names: Vec::new(),
            display_name: None,
            library: None,
            attributes: Vec::new(),
        }
    }

    /// Adds an extra alias matched in addition to the component's own variants.
    #[must_use]
    pub fn match_name(mut self, alias: impl Into<String>) -> Self {
        self.match_names.push(alias.into());
        self
    }

    /// Sets the name rendered in messages.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the owning library.
    #[must_use]
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Appends a requirement.
    #[must_use]
    pub fn require(mut self, requirement: impl Into<AttributeRequirement>) -> Self {
        self.attributes.push(requirement.into());
        self
    }

    /// Returns the canonical component identifier.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Returns the extra aliases.
    #[must_use]
    pub fn match_names(&self) -> &[String] {
        &self.match_names
    }

    /// Returns the owning library, if any.
    #[must_use]
    pub fn library_name(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Returns the requirements in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeRequirement] {
        &self.attributes
    }

    /// Name used in messages: the display name, else the component.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.component)
    }
}

impl fmt::Display for ComponentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.library {
            Some(library) => write!(f, "{library}/{}", self.component),
            None => write!(f, "{}", self.component),
        }
    }
}

/// Rules grouped under a UI library name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    name: String,
    components: Vec<ComponentRule>,
}

impl RuleGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Adds a component rule to the group.
    #[must_use]
    pub fn component(mut self, rule: ComponentRule) -> Self {
        self.components.push(rule);
        self
    }

    /// Returns the library name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rules in the group.
    #[must_use]
    pub fn components(&self) -> &[ComponentRule] {
        &self.components
    }
}

/// Input of the registry builder: flat rules plus library groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    components: Vec<ComponentRule>,
    libraries: Vec<RuleGroup>,
}

impl RuleOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flat component rule.
    #[must_use]
    pub fn component(mut self, rule: ComponentRule) -> Self {
        self.components.push(rule);
        self
    }

    /// Adds a library group.
    #[must_use]
    pub fn library(mut self, group: RuleGroup) -> Self {
        self.libraries.push(group);
        self
    }

    /// Appends another set of options after this one.
    ///
    /// Rules from `other` are registered later and win on key collisions.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        let own = self.flatten();
        self.components = own;
        self.libraries.clear();
        self.components.extend(other.flatten());
        self
    }

    /// Returns `true` when no rules of any kind are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.libraries.iter().all(|g| g.components.is_empty())
    }

    /// Flat rules first, then each group's rules tagged with the group name.
    #[must_use]
    pub fn flatten(&self) -> Vec<ComponentRule> {
        let mut flattened = self.components.clone();
        for group in &self.libraries {
            for rule in &group.components {
                let mut rule = rule.clone();
                rule.library = Some(group.name.clone());
                flattened.push(rule);
            }
        }
        flattened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name() {
        let rule = ComponentRule::new("ElInput");
        assert_eq!(rule.label(), "ElInput");
        assert_eq!(rule.display_name("Input").label(), "Input");
    }

    #[test]
    fn flatten_tags_group_rules_with_library() {
        let options = RuleOptions::new()
            .component(ComponentRule::new("MyInput").require("maxlength"))
            .library(RuleGroup::new("vant").component(ComponentRule::new("VanField")));
        let flat = options.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].library_name(), None);
        assert_eq!(flat[1].library_name(), Some("vant"));
        assert_eq!(flat[1].to_string(), "vant/VanField");
    }

    #[test]
    fn merge_appends_in_order() {
        let first = RuleOptions::new().library(
            RuleGroup::new("element-plus").component(ComponentRule::new("ElInput")),
        );
        let second = RuleOptions::new().component(ComponentRule::new("ElInput"));
        let merged = first.merge(second).flatten();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].library_name(), Some("element-plus"));
        assert_eq!(merged[1].library_name(), None);
    }

    #[test]
    fn requirement_defaults() {
        let req = AttributeRequirement::from("maxlength");
        assert_eq!(req.name(), "maxlength");
        assert!(!req.allows_empty());
        assert!(req.reason().is_none());
        assert!(req.suggestion().is_none());
    }
}
