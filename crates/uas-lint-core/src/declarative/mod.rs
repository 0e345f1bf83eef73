//! Declarative component attribute rules driven by TOML configuration.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ convert (drops blank requirements)
//! RuleOptions (pure domain model)
//!   ↓ RuleRegistry::build() (drops unusable rules)
//! RuleRegistry
//! ```

pub mod config_dto;
pub mod loader;
pub mod model;
pub mod registry;

pub use model::{AttributeRequirement, ComponentRule, RuleGroup, RuleOptions};
pub use registry::RuleRegistry;

/// Errors from parsing TOML rule options.
#[derive(Debug, thiserror::Error)]
pub enum LoadRulesError {
    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parses TOML content into rule options.
///
/// Returns empty options if no `[[components]]` or `[[libraries]]` are present.
///
/// # Errors
///
/// Returns an error if the TOML is malformed.
pub fn load_options_from_toml(content: &str) -> Result<RuleOptions, LoadRulesError> {
    let dto: config_dto::RuleOptionsDto = toml::from_str(content)?;
    Ok(loader::load(dto))
}

/// Parses TOML content and builds the rule registry.
///
/// # Errors
///
/// Returns an error if the TOML is malformed.
pub fn load_registry_from_toml(content: &str) -> Result<RuleRegistry, LoadRulesError> {
    load_options_from_toml(content).map(|options| RuleRegistry::build(&options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_from_toml() {
        let registry = load_registry_from_toml(
            r#"
[[components]]
component = "ElInput"
matchNames = ["el-input"]
attributes = ["maxlength"]

[[components]]
component = "ElSelect"
attributes = []
"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("el-select").is_none());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let result = load_registry_from_toml("[[components]\ncomponent = 1");
        assert!(matches!(result, Err(LoadRulesError::Toml(_))));
    }
}
