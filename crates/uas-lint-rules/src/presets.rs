//! Rule presets for common configurations.

use std::str::FromStr;

use uas_lint_core::{AttributeRequirement, ComponentRule, RuleGroup, RuleOptions, Severity};

/// Preset configurations for uas-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Element Plus input limits, reported as warnings.
    #[default]
    Recommended,
    /// No built-in component rules.
    None,
}

impl Preset {
    /// Returns the component rules for this preset.
    #[must_use]
    pub fn options(self) -> RuleOptions {
        match self {
            Self::Recommended => recommended_options(),
            Self::None => RuleOptions::new(),
        }
    }

    /// Severity the preset reports at.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Recommended => Severity::Warning,
            Self::None => Severity::Error,
        }
    }
}

/// Error returned for an unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{0}` (expected `recommended` or `none`)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "none" => Ok(Self::None),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// Returns the recommended component rules.
///
/// Includes:
/// - `ElInput`: `maxlength`, `show-word-limit` (may be empty)
/// - `ElInputNumber`: `max`, `min`
#[must_use]
pub fn recommended_options() -> RuleOptions {
    let element_plus = RuleGroup::new("element-plus")
        .component(
            ComponentRule::new("ElInput")
                .match_name("el-input")
                .require(
                    AttributeRequirement::new("maxlength")
                        .with_reason("统一输入上限，防止超长数据写入后端"),
                )
                .require(
                    AttributeRequirement::new("show-word-limit")
                        .allow_empty(true)
                        .with_reason("搭配 maxlength 展示字数提示"),
                ),
        )
        .component(
            ComponentRule::new("ElInputNumber")
                .match_name("el-input-number")
                .require(AttributeRequirement::new("max").with_reason("数值型输入必须设置 max 防止越界"))
                .require(AttributeRequirement::new("min").with_reason("数值型输入必须设置 min 防止越界")),
        );

    RuleOptions::new().library(element_plus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uas_lint_core::RuleRegistry;

    #[test]
    fn test_preset_options() {
        assert!(!Preset::Recommended.options().is_empty());
        assert!(Preset::None.options().is_empty());
        assert_eq!(Preset::default(), Preset::Recommended);
    }

    #[test]
    fn parse_preset() {
        assert_eq!("none".parse::<Preset>(), Ok(Preset::None));
        assert_eq!(
            "strict".parse::<Preset>(),
            Err(UnknownPreset("strict".to_string()))
        );
    }

    #[test]
    fn recommended_registry_covers_element_plus_inputs() {
        let registry = RuleRegistry::build(&recommended_options());
        let input = registry.lookup("el-input").unwrap();
        assert_eq!(input.library_name(), Some("element-plus"));
        assert_eq!(input.attributes().len(), 2);
        assert!(registry.lookup("ElInputNumber").is_some());
        assert!(registry.lookup("el-select").is_none());
    }
}
