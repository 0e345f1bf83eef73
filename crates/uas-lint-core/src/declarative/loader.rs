//! DTO → Domain model conversion.
//!
//! Conversion never fails. Partial configuration degrades gracefully:
//! requirements with a blank name are skipped here, and rules left without
//! requirements are dropped later by the registry builder.

use tracing::debug;

use super::config_dto::{AttributeRequirementDto, ComponentRuleDto, RuleGroupDto, RuleOptionsDto};
use super::model::{AttributeRequirement, ComponentRule, RuleGroup, RuleOptions};

/// Converts a `RuleOptionsDto` to `RuleOptions`.
#[must_use]
pub fn load(dto: RuleOptionsDto) -> RuleOptions {
    let mut options = RuleOptions::new();
    for component in dto.components {
        options = options.component(convert_component(component));
    }
    for group in dto.libraries {
        options = options.library(convert_group(group));
    }
    options
}

fn convert_group(dto: RuleGroupDto) -> RuleGroup {
    dto.components
        .into_iter()
        .map(convert_component)
        .fold(RuleGroup::new(dto.name), RuleGroup::component)
}

fn convert_component(dto: ComponentRuleDto) -> ComponentRule {
    let mut rule = ComponentRule::new(dto.component);
    for alias in dto.match_names {
        rule = rule.match_name(alias);
    }
    if let Some(display_name) = dto.display_name {
        rule = rule.display_name(display_name);
    }
    if let Some(library) = dto.library {
        rule = rule.library(library);
    }
    for (i, attribute) in dto.attributes.into_iter().enumerate() {
        match convert_requirement(attribute) {
            Some(requirement) => rule = rule.require(requirement),
            None => debug!("{}: skipping attributes[{i}] with blank name", rule.component()),
        }
    }
    rule
}

fn convert_requirement(dto: AttributeRequirementDto) -> Option<AttributeRequirement> {
    let requirement = match dto {
        AttributeRequirementDto::Name(name) => AttributeRequirement::new(name),
        AttributeRequirementDto::Detailed {
            name,
            allow_empty,
            reason,
            suggestion,
        } => {
            let mut requirement = AttributeRequirement::new(name).allow_empty(allow_empty);
            if let Some(reason) = reason {
                requirement = requirement.with_reason(reason);
            }
            if let Some(suggestion) = suggestion {
                requirement = requirement.with_suggestion(suggestion);
            }
            requirement
        }
    };
    (!requirement.name().trim().is_empty()).then_some(requirement)
}
