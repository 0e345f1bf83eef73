//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain model types via the loader.

use serde::Deserialize;

/// Raw representation of the rule options.
///
/// Lives next to the base `Config` keys in `uas-lint.toml` as
/// `[[components]]` and `[[libraries]]` sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleOptionsDto {
    /// Plain component rules independent from libraries.
    #[serde(default)]
    pub components: Vec<ComponentRuleDto>,

    /// Library-scoped rule groups.
    #[serde(default)]
    pub libraries: Vec<RuleGroupDto>,
}

/// TOML representation of a component rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRuleDto {
    /// Component tag or declared name (e.g., "ElInput").
    pub component: String,
    /// Additional aliases.
    #[serde(default, rename = "matchNames", alias = "match-names")]
    pub match_names: Vec<String>,
    /// Name rendered in messages.
    #[serde(default, rename = "displayName", alias = "display-name")]
    pub display_name: Option<String>,
    /// Library name, only used for message context.
    #[serde(default)]
    pub library: Option<String>,
    /// Required attributes.
    #[serde(default)]
    pub attributes: Vec<AttributeRequirementDto>,
}

/// A requirement: a bare attribute name or a detailed table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeRequirementDto {
    /// `"maxlength"`
    Name(String),
    /// `{ name = "show-word-limit", allowEmpty = true }`
    Detailed {
        /// Attribute name.
        name: String,
        /// Whether a declared-but-empty value is accepted.
        #[serde(default, rename = "allowEmpty", alias = "allow-empty")]
        allow_empty: bool,
        /// Reason appended to the message.
        #[serde(default)]
        reason: Option<String>,
        /// Help text.
        #[serde(default)]
        suggestion: Option<String>,
    },
}

/// TOML representation of a library group.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleGroupDto {
    /// Library name (e.g., "element-plus").
    pub name: String,
    /// Component rules of this library.
    #[serde(default)]
    pub components: Vec<ComponentRuleDto>,
}
