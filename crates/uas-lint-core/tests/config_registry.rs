//! End-to-end: `uas-lint.toml` text to a usable registry.

use std::sync::Arc;

use uas_lint_core::attribute::{attribute_name, find_attribute, is_empty};
use uas_lint_core::naming::normalize;
use uas_lint_core::{Config, MarkupAttribute, RuleRegistry, Span};

const CONFIG: &str = r#"
preset = "none"

[[components]]
component = "ElInput"
matchNames = ["el-input"]
attributes = ["maxlength", { name = "show-word-limit", allowEmpty = true }]

[[components]]
component = "ElEmpty"
attributes = []

[[libraries]]
name = "vant"

[[libraries.components]]
component = "VanField"
display-name = "Field"
attributes = [{ name = "maxlength", reason = "keep inputs bounded" }]
"#;

fn registry() -> RuleRegistry {
    let config = Config::parse(CONFIG).unwrap();
    RuleRegistry::build(&config.rule_options())
}

#[test]
fn every_naming_convention_hits_the_same_rule() {
    let registry = registry();
    let rule = registry.lookup("ElInput").unwrap();
    for name in ["el-input", "EL_INPUT", "elinput", "El-Input"] {
        assert!(Arc::ptr_eq(rule, registry.lookup(name).unwrap()), "{name}");
    }
    assert_eq!(normalize("el-input"), normalize("EL_INPUT"));
}

#[test]
fn empty_rules_are_not_registered() {
    let registry = registry();
    assert!(registry.lookup("ElEmpty").is_none());
    assert_eq!(registry.rules().len(), 2);
}

#[test]
fn grouped_rules_carry_library_and_reason() {
    let registry = registry();
    let field = registry.lookup("van-field").unwrap();
    assert_eq!(field.library_name(), Some("vant"));
    assert_eq!(field.label(), "Field");
    assert_eq!(field.attributes()[0].reason(), Some("keep inputs bounded"));
}

#[test]
fn classifier_matches_requirements_against_attributes() {
    let registry = registry();
    let rule = registry.lookup("el-input").unwrap();
    let attrs = vec![
        MarkupAttribute::bound("bind", Some("maxlength"), Span::default()),
        MarkupAttribute::literal("show-word-limit", None, Span::default()),
    ];

    let maxlength = find_attribute(&attrs, rule.attributes()[0].name()).unwrap();
    assert_eq!(attribute_name(maxlength), "maxlength");
    assert!(!is_empty(maxlength));

    let limit = find_attribute(&attrs, rule.attributes()[1].name()).unwrap();
    assert!(is_empty(limit));
    assert!(rule.attributes()[1].allows_empty());
}
